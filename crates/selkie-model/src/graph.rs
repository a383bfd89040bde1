//! Containment-hierarchy container for topology elements.
//!
//! Storage follows the compound half of `@dagrejs/graphlib`: insertion-ordered element and
//! edge vectors with hash indexes, plus explicit parent/children maps. The routing core only
//! ever reads the hierarchy; mutation happens while a model is being assembled.
//!
//! The container is permissive: it does not detect containment cycles. Models built through
//! [`crate::schema::TopologyModel::build`] are validated; hand-assembled graphs are expected
//! to keep their parent chains finite and acyclic.

use crate::model::{ElementLabel, ModelKind};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Directed connection between two elements, by id. Read-only for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct ElementEntry {
    id: String,
    label: ElementLabel,
}

#[derive(Debug, Clone)]
pub struct TopologyGraph {
    root: String,
    elements: Vec<ElementEntry>,
    element_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    parent: HashMap<String, String>,
    children: HashMap<String, Vec<String>>,
}

impl TopologyGraph {
    /// Creates the container with a root element of kind `Graph` (no parent).
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let mut g = Self {
            root: root.clone(),
            elements: Vec::new(),
            element_index: HashMap::default(),
            edges: Vec::new(),
            parent: HashMap::default(),
            children: HashMap::default(),
        };
        g.insert(
            root,
            ElementLabel {
                kind: ModelKind::Graph,
                ..Default::default()
            },
        );
        g
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn insert(&mut self, id: String, label: ElementLabel) {
        let idx = self.elements.len();
        self.elements.push(ElementEntry {
            id: id.clone(),
            label,
        });
        self.element_index.insert(id, idx);
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.element_index.contains_key(id)
    }

    /// Inserts or replaces an element. A newly inserted element starts out as a child of the
    /// root graph until [`set_parent`](Self::set_parent) moves it.
    pub fn set_node(&mut self, id: impl Into<String>, label: ElementLabel) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.element_index.get(&id) {
            self.elements[idx].label = label;
            return self;
        }
        self.insert(id.clone(), label);
        if id != self.root {
            let root = self.root.clone();
            self.link_parent(id, root);
        }
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.has_node(&id) {
            return self;
        }
        self.set_node(id, ElementLabel::default())
    }

    pub fn node(&self, id: &str) -> Option<&ElementLabel> {
        self.element_index
            .get(id)
            .map(|&idx| &self.elements[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut ElementLabel> {
        self.element_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.elements[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.elements.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.elements.iter().map(|e| e.id.clone()).collect()
    }

    pub fn set_parent(&mut self, child: impl Into<String>, parent: impl Into<String>) -> &mut Self {
        let child = child.into();
        let parent = parent.into();
        self.ensure_node(child.clone());
        self.ensure_node(parent.clone());
        self.link_parent(child, parent);
        self
    }

    /// Detaches `child` from its parent. A detached element is no longer reachable as anyone's
    /// ancestor and its own chain ends immediately.
    pub fn clear_parent(&mut self, child: &str) -> &mut Self {
        if let Some(prev) = self.parent.remove(child) {
            if let Some(ch) = self.children.get_mut(&prev) {
                ch.retain(|c| c != child);
            }
        }
        self
    }

    fn link_parent(&mut self, child: String, parent: String) {
        if let Some(prev) = self.parent.insert(child.clone(), parent.clone()) {
            if let Some(ch) = self.children.get_mut(&prev) {
                ch.retain(|c| c != &child);
            }
        }
        let entry = self.children.entry(parent).or_default();
        if !entry.iter().any(|c| c == &child) {
            entry.push(child);
        }
    }

    pub fn parent(&self, child: &str) -> Option<&str> {
        self.parent.get(child).map(|s| s.as_str())
    }

    pub fn children(&self, parent: &str) -> &[String] {
        self.children.get(parent).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Ancestor reached by following `depth` parent links from `id`.
    ///
    /// `depth == 0` is the element itself. Returns `None` once the chain runs out before all
    /// `depth` steps are taken; the root graph is the last element any attached chain yields.
    pub fn ancestor_at_depth<'a>(&'a self, id: &'a str, depth: usize) -> Option<&'a str> {
        if !self.has_node(id) {
            return None;
        }
        let mut curr = id;
        for _ in 0..depth {
            curr = self.parent(curr)?;
        }
        Some(curr)
    }

    /// Appends an edge. Duplicates are allowed and insertion order is preserved; the
    /// aggregation fold in `selkie` is defined over this exact scan order.
    pub fn set_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> &mut Self {
        let source = source.into();
        let target = target.into();
        self.ensure_node(source.clone());
        self.ensure_node(target.clone());
        self.edges.push(Edge { source, target });
        self
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
