//! Declarative JSON model for assembling a [`TopologyGraph`].
//!
//! The shape mirrors the node/edge model objects topology consumers hand the upstream
//! library: a flat node list with optional parent ids, and a separate edge list. Building
//! validates references and containment acyclicity; everything else is permissive.

use crate::error::ModelError;
use crate::geom::{point, size};
use crate::graph::TopologyGraph;
use crate::model::ElementLabel;
use serde::{Deserialize, Serialize};

/// Id of the synthetic root element created for every built model.
pub const ROOT_ID: &str = "graph";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeModel {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub group: bool,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub hull: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeModel {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopologyModel {
    #[serde(default)]
    pub nodes: Vec<NodeModel>,
    #[serde(default)]
    pub edges: Vec<EdgeModel>,
}

impl TopologyModel {
    /// Validates the model and assembles the containment hierarchy.
    ///
    /// Nodes without a `parent` become children of the root. Parents must be declared nodes
    /// (or [`ROOT_ID`]); edge endpoints must be declared nodes; parent chains must be
    /// cycle-free.
    pub fn build(&self) -> Result<TopologyGraph, ModelError> {
        let mut g = TopologyGraph::new(ROOT_ID);

        for node in &self.nodes {
            if g.has_node(&node.id) {
                return Err(ModelError::DuplicateId {
                    id: node.id.clone(),
                });
            }
            g.set_node(
                node.id.as_str(),
                ElementLabel {
                    group: node.group,
                    collapsed: node.collapsed,
                    position: point(node.x, node.y),
                    dimensions: size(node.width, node.height),
                    hull: node
                        .hull
                        .as_ref()
                        .map(|pts| pts.iter().map(|&[x, y]| point(x, y)).collect()),
                    ..Default::default()
                },
            );
        }

        for node in &self.nodes {
            let Some(parent) = &node.parent else {
                continue;
            };
            if !g.has_node(parent) {
                return Err(ModelError::UnknownParent {
                    id: node.id.clone(),
                    parent: parent.clone(),
                });
            }
            g.set_parent(node.id.as_str(), parent.as_str());
        }

        // Parent chains must terminate. Bound the walk by the element count so a cycle is
        // reported instead of looping.
        for node in &self.nodes {
            let mut steps = 0usize;
            let mut curr = g.parent(&node.id);
            while let Some(p) = curr {
                if p == node.id || steps > g.node_count() {
                    return Err(ModelError::ParentCycle {
                        id: node.id.clone(),
                    });
                }
                steps += 1;
                curr = g.parent(p);
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !g.has_node(endpoint) {
                    return Err(ModelError::UnknownEndpoint {
                        source: edge.source.clone(),
                        target: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            g.set_edge(edge.source.as_str(), edge.target.as_str());
        }

        Ok(g)
    }
}
