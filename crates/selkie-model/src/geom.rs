//! Geometry aliases shared by the element model and the routing core.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Midpoint of two points, computed as `((a.x + b.x) / 2, (a.y + b.y) / 2)`.
///
/// The aggregation fold in `selkie` is defined in terms of this exact form; keep the written-out
/// average rather than a lerp so folded anchors stay bit-identical across refactors.
pub fn midpoint(a: Point, b: Point) -> Point {
    point((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
