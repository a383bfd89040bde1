//! Line-segment intersection primitive consumed by the bendpoint resolver.

use selkie_model::geom::{Point, point};

/// Intersection of segments `a` and `b`, endpoints inclusive.
///
/// Total over arbitrary inputs: parallel, collinear, and degenerate zero-length segments all
/// come back as `None` rather than a fault.
pub fn lines_intersection(a: (Point, Point), b: (Point, Point)) -> Option<Point> {
    let (a1, a2) = a;
    let (b1, b2) = b;

    let denom = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if denom == 0.0 {
        return None;
    }

    let ua = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / denom;
    let ub = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / denom;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(point(a1.x + ua * (a2.x - a1.x), a1.y + ua * (a2.y - a1.y)))
}
