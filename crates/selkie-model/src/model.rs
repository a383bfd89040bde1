//! Core element label types.
//!
//! These are plain data in the way Dagre-style layout labels are plain data: no behavior,
//! `Clone`-friendly, absent values as `Option`.

use crate::geom::{Point, Size};
use serde::{Deserialize, Serialize};

/// Kind of a model object. Elements stored in the containment hierarchy are `Graph` (the
/// synthetic root) and `Node` (leaves and groups); `Edge` names the edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Graph,
    Node,
    Edge,
}

/// One element of the containment hierarchy.
///
/// `position` is the stored top-left position for leaves and the stored position as-is for
/// groups. `dimensions` is only meaningful for leaves. `hull` is the last-computed boundary
/// polygon and is present only on collapsed groups and (optionally) the root; when present it
/// has at least one point and closes implicitly from the last point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementLabel {
    pub kind: ModelKind,
    pub group: bool,
    pub collapsed: bool,
    pub position: Point,
    pub dimensions: Size,
    pub hull: Option<Vec<Point>>,
}

impl Default for ElementLabel {
    fn default() -> Self {
        Self {
            kind: ModelKind::Node,
            group: false,
            collapsed: false,
            position: Point::origin(),
            dimensions: Size::zero(),
            hull: None,
        }
    }
}
