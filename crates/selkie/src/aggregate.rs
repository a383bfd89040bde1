//! Aggregate edge routing.
//!
//! Port of `@patternfly/react-topology` `aggregate-utils.ts`. Three stages, leaf-first:
//! ancestor-depth traversal (lives on the graph container), per-depth anchor aggregation
//! ([`aggregated_position`]), and the bendpoint resolver that clips the anchor chain against
//! each group's boundary hull ([`aggregated_edge_bendpoints`]).
//!
//! Everything here is a pure function of the graph snapshot. Absences (missing ancestors,
//! missing hulls, scans with no matching edge) contribute nothing; they are never faults.

use crate::anchor::lines_intersection;
use selkie_model::geom::{Point, midpoint, vector};
use selkie_model::{Edge, ModelKind, TopologyGraph};

/// One nesting level's worth of aggregated connection data: the folded anchor position plus
/// the boundary hull of the group side it stands in for. Built fresh per resolve, never kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub pos: Point,
    pub hull_points: Vec<Point>,
}

/// Which endpoint of a scanned edge is the one nested under `src`. The distinction matters:
/// the two sides get different anchor offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FoundEnd {
    Source,
    Target,
}

/// Collapses every underlying connection between `src` and `tgt` at `nesting_depth` into a
/// single anchor, paired with the boundary hull of the group side.
///
/// The anchor is a running midpoint over the matching contributions in edge-scan order: the
/// first contribution seeds it, each later one halves toward the new contribution. That fold
/// is order-dependent and is deliberately not a true centroid; downstream bendpoints rely on
/// the graph's edge insertion order staying stable.
///
/// Returns `None` when `src == tgt`, when no boundary hull is available, or when no edge
/// resolves to this pair at this depth.
pub fn aggregated_position(
    g: &TopologyGraph,
    src: &str,
    tgt: &str,
    nesting_depth: usize,
) -> Option<Aggregate> {
    if src == tgt {
        return None;
    }

    // The hull comes from `src` unless `src` is the root graph, in which case the target
    // side's hull stands in. A leaf `src` carries no hull, and that alone ends the
    // aggregation for this depth.
    let hull_owner = if g.node(src)?.kind != ModelKind::Graph {
        src
    } else {
        tgt
    };
    let Some(hull_points) = g.node(hull_owner).and_then(|n| n.hull.clone()) else {
        tracing::trace!(src, tgt, nesting_depth, "no boundary hull, nothing to aggregate");
        return None;
    };

    let mut pos: Option<Point> = None;
    for edge in g.edges() {
        let found = if g.ancestor_at_depth(&edge.source, nesting_depth) == Some(src)
            && g.ancestor_at_depth(&edge.target, nesting_depth) == Some(tgt)
        {
            Some(FoundEnd::Source)
        } else if g.ancestor_at_depth(&edge.target, nesting_depth) == Some(src)
            && g.ancestor_at_depth(&edge.source, nesting_depth) == Some(tgt)
        {
            Some(FoundEnd::Target)
        } else {
            None
        };

        let found_id = match found {
            Some(FoundEnd::Source) => edge.source.as_str(),
            Some(FoundEnd::Target) => edge.target.as_str(),
            None => continue,
        };
        let Some(found_label) = g.node(found_id) else {
            continue;
        };

        let mut contribution = found_label.position;
        if !found_label.group {
            // Leaf endpoints anchor at their visual center; group endpoints at their stored
            // position as-is. Upstream quirk, preserved: the offset uses the *edge source's*
            // dimensions for both ends.
            if let Some(source_label) = g.node(&edge.source) {
                let dims = source_label.dimensions;
                contribution += vector(dims.width / 2.0, dims.height / 2.0);
            }
        }

        pos = Some(match pos {
            Some(prev) => midpoint(prev, contribution),
            None => contribution,
        });
    }

    pos.map(|pos| Aggregate { pos, hull_points })
}

/// Anchor chain for a connection from `src` to `tgt`: one source-side and one target-side
/// aggregate per nesting level, from the source element up to the top of its containment
/// chain.
///
/// The target frame is fixed at `tgt`'s immediate parent; a detached (unparented) target
/// yields an empty chain since there is no frame to aggregate in.
pub fn aggregated_positions(g: &TopologyGraph, src: &str, tgt: &str) -> Vec<Aggregate> {
    let mut aggregates: Vec<Aggregate> = Vec::new();

    let Some(target) = g.ancestor_at_depth(tgt, 1) else {
        return aggregates;
    };

    let mut nesting_depth = 0;
    let mut curr = g.ancestor_at_depth(src, 0);
    while let Some(c) = curr {
        if let Some(agg) = aggregated_position(g, c, target, nesting_depth) {
            aggregates.push(agg);
        }
        if let Some(agg) = aggregated_position(g, target, c, nesting_depth) {
            aggregates.push(agg);
        }
        nesting_depth += 1;
        curr = g.ancestor_at_depth(src, nesting_depth);
    }

    aggregates
}

/// Bendpoints for an edge whose endpoints may be obscured by collapsed groups.
///
/// Each anchor pairs with its neighbor folding toward the middle of the chain (anchors in the
/// second half pair backwards), and moves to the first crossing between the anchor-to-anchor
/// segment and its own hull. Fewer than two aggregable anchors means there is no segment to
/// clip, so the result is empty and the caller falls back to its ordinary routing.
pub fn aggregated_edge_bendpoints(g: &TopologyGraph, edge: &Edge) -> Vec<Point> {
    let aggregates = aggregated_positions(g, &edge.source, &edge.target);
    if aggregates.len() < 2 {
        tracing::debug!(
            source = edge.source.as_str(),
            target = edge.target.as_str(),
            found = aggregates.len(),
            "not enough aggregates for bendpoints"
        );
        return Vec::new();
    }

    let len = aggregates.len();
    aggregates
        .iter()
        .enumerate()
        .map(|(i, agg)| {
            let partner = if 2 * i >= len { i - 1 } else { i + 1 };
            clip_to_hull(agg, aggregates[partner].pos)
        })
        .collect()
}

/// First hull edge (in polygon order, wrapping last-to-first) crossed by the segment from the
/// aggregate's anchor to `partner` wins; the anchor moves to that crossing. First-hit
/// semantics, not nearest-hit. No crossing leaves the anchor where it is.
fn clip_to_hull(agg: &Aggregate, partner: Point) -> Point {
    let hull = &agg.hull_points;
    for (j, &p) in hull.iter().enumerate() {
        let q = hull[if j + 1 < hull.len() { j + 1 } else { 0 }];
        if let Some(crossing) = lines_intersection((agg.pos, partner), (p, q)) {
            return crossing;
        }
    }
    agg.pos
}
