//! Topology element model used by `selkie`.
//!
//! Baseline: the headless element model of `@patternfly/react-topology`: a containment
//! hierarchy of graph/node/group elements carrying positions, dimensions, and last-computed
//! boundary hulls, plus the edge list the routing core reads.
//!
//! Nothing in this crate computes layout. It stores what a layout or renderer last decided,
//! and the routing crate consumes that snapshot.

pub mod error;
pub mod geom;
pub mod graph;
pub mod model;
pub mod schema;

pub use error::ModelError;
pub use graph::{Edge, TopologyGraph};
pub use model::{ElementLabel, ModelKind};
pub use schema::{EdgeModel, NodeModel, TopologyModel};
