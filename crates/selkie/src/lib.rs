//! Aggregate edge routing for nested topology graphs with collapsed groups.
//!
//! Baseline: `@patternfly/react-topology` (`aggregate-utils.ts` plus the anchor utilities it
//! consumes), expressed over an explicit containment hierarchy instead of live element
//! objects.
//!
//! When an edge's true endpoint is hidden inside a collapsed group, the rendered edge must
//! route to the group's boundary at a position reflecting the aggregate position of the
//! hidden endpoints that actually participate in the connection, bending exactly where the
//! anchor-to-anchor segment crosses the group's boundary hull.
//!
//! The entry point is [`aggregated_edge_bendpoints`]; the lower-level stages are public so
//! each can be exercised on its own.

pub use selkie_model as model;

pub mod aggregate;
pub mod anchor;
pub mod hull;

pub use aggregate::{
    Aggregate, aggregated_edge_bendpoints, aggregated_position, aggregated_positions,
};
pub use anchor::lines_intersection;
pub use hull::{convex_hull, group_hull_points};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
