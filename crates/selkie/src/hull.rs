//! Boundary hull helpers for collapsed groups.
//!
//! The resolver itself only reads hulls stored on elements; these helpers exist for models
//! that arrive without precomputed boundaries (the CLI fills them in before routing).

use selkie_model::TopologyGraph;
use selkie_model::geom::{Point, point};
use std::cmp::Ordering;

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull via Andrew's monotone chain: counter-clockwise, starting at the
/// lexicographically smallest point, without a duplicate closing point.
///
/// Fewer than three distinct input points come back deduplicated and sorted instead.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    pts.dedup_by(|a, b| a.x == b.x && a.y == b.y);
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::new();
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Padded hull of a group's leaf descendants.
///
/// Gathers the four `padding`-expanded corners of every leaf nested (at any depth) under
/// `group_id` and hulls them. `None` when no leaf descendant exists; an empty group has no
/// boundary to route against.
pub fn group_hull_points(g: &TopologyGraph, group_id: &str, padding: f64) -> Option<Vec<Point>> {
    let mut corners: Vec<Point> = Vec::new();
    collect_leaf_corners(g, group_id, padding, &mut corners);
    if corners.is_empty() {
        return None;
    }
    Some(convex_hull(&corners))
}

fn collect_leaf_corners(g: &TopologyGraph, id: &str, padding: f64, out: &mut Vec<Point>) {
    for child in g.children(id) {
        let Some(label) = g.node(child) else {
            continue;
        };
        if label.group {
            collect_leaf_corners(g, child, padding, out);
            continue;
        }
        let pos = label.position;
        let dims = label.dimensions;
        out.push(point(pos.x - padding, pos.y - padding));
        out.push(point(pos.x + dims.width + padding, pos.y - padding));
        out.push(point(pos.x + dims.width + padding, pos.y + dims.height + padding));
        out.push(point(pos.x - padding, pos.y + dims.height + padding));
    }
}
