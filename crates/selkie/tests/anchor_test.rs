use selkie::lines_intersection;
use selkie::model::geom::point;

#[test]
fn crossing_segments_intersect_at_the_exact_point() {
    let a = (point(0.5, 0.5), point(10.5, 0.5));
    let b = (point(1.0, 0.0), point(1.0, 1.0));
    assert_eq!(lines_intersection(a, b), Some(point(1.0, 0.5)));
}

#[test]
fn intersection_is_symmetric_in_its_arguments() {
    let a = (point(0.0, 0.0), point(4.0, 4.0));
    let b = (point(0.0, 4.0), point(4.0, 0.0));
    assert_eq!(lines_intersection(a, b), Some(point(2.0, 2.0)));
    assert_eq!(lines_intersection(b, a), Some(point(2.0, 2.0)));
}

#[test]
fn touching_endpoints_count_as_an_intersection() {
    let a = (point(0.0, 0.0), point(1.0, 0.0));
    let b = (point(0.0, 0.0), point(0.0, 1.0));
    assert_eq!(lines_intersection(a, b), Some(point(0.0, 0.0)));
}

#[test]
fn parallel_segments_do_not_intersect() {
    let a = (point(0.0, 0.0), point(10.0, 0.0));
    let b = (point(0.0, 1.0), point(10.0, 1.0));
    assert_eq!(lines_intersection(a, b), None);
}

#[test]
fn collinear_overlapping_segments_do_not_intersect() {
    let a = (point(0.0, 0.0), point(10.0, 0.0));
    let b = (point(5.0, 0.0), point(15.0, 0.0));
    assert_eq!(lines_intersection(a, b), None);
}

#[test]
fn lines_that_cross_outside_the_segments_do_not_intersect() {
    let a = (point(0.0, 0.0), point(1.0, 0.0));
    let b = (point(5.0, -1.0), point(5.0, 1.0));
    assert_eq!(lines_intersection(a, b), None);
}

#[test]
fn degenerate_zero_length_segments_are_no_intersection() {
    let p = (point(3.0, 3.0), point(3.0, 3.0));
    let b = (point(0.0, 0.0), point(10.0, 10.0));
    assert_eq!(lines_intersection(p, b), None);
    assert_eq!(lines_intersection(b, p), None);
    assert_eq!(lines_intersection(p, p), None);
}

#[test]
fn non_finite_inputs_are_no_intersection() {
    let a = (point(f64::NAN, 0.0), point(1.0, 0.0));
    let b = (point(0.0, -1.0), point(0.0, 1.0));
    assert_eq!(lines_intersection(a, b), None);
}
