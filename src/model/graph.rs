use egui::Pos2;
use petgraph::{
    stable_graph::{NodeIndex, StableGraph},
    visit::{EdgeRef, IntoEdgeReferences},
    Directed, Direction,
};
use serde::{Deserialize, Serialize};

use crate::error::{OpError, OpResult};
use crate::layouts::forest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Derived by the layout engine, never set by operations.
    pub location: Pos2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge;

type Inner = StableGraph<GraphNode, GraphEdge, Directed>;

/// Directed graph for the traversal demo.
///
/// Nodes and edges are only ever appended (or dropped wholesale on clear), so
/// petgraph indices double as insertion order and edge indices are stable
/// handles for highlighting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphModel {
    g: Inner,
    traversal: Vec<String>,
    traversed_edges: Vec<usize>,
}

impl PartialEq for GraphModel {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes())
            && self.edges() == other.edges()
            && self.traversal == other.traversal
            && self.traversed_edges == other.traversed_edges
    }
}

impl GraphModel {
    /// Builds a graph from trusted parts; invalid nodes or edges are skipped.
    pub fn from_parts<'a>(
        ids: impl IntoIterator<Item = &'a str>,
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut model = Self::default();
        for id in ids {
            if model.index_of(id).is_none() {
                model.g.add_node(GraphNode {
                    id: id.to_string(),
                    location: Pos2::ZERO,
                });
            }
        }
        for (from, to) in edges {
            if let (Some(a), Some(b)) = (model.index_of(from), model.index_of(to)) {
                if model.g.find_edge(a, b).is_none() {
                    model.g.add_edge(a, b, GraphEdge);
                }
            }
        }
        model.relayout();
        model
    }

    pub fn g(&self) -> &Inner {
        &self.g
    }

    pub fn node_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.g.node_count() == 0
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.g.node_indices().map(move |i| &self.g[i])
    }

    /// `(edge index, from id, to id)` in insertion order.
    pub fn edges(&self) -> Vec<(usize, &str, &str)> {
        let mut out: Vec<_> = self
            .g
            .edge_references()
            .map(|e| {
                (
                    e.id().index(),
                    self.g[e.source()].id.as_str(),
                    self.g[e.target()].id.as_str(),
                )
            })
            .collect();
        out.sort_by_key(|(i, _, _)| *i);
        out
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.g.node_indices().find(|&i| self.g[i].id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn id(&self, idx: NodeIndex) -> &str {
        &self.g[idx].id
    }

    pub fn location(&self, id: &str) -> Option<Pos2> {
        self.index_of(id).map(|i| self.g[i].location)
    }

    /// Outgoing edges of `idx` as `(edge index, target)`, oldest edge first.
    pub fn out_edges(&self, idx: NodeIndex) -> Vec<(usize, NodeIndex)> {
        let mut out: Vec<_> = self
            .g
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id().index(), e.target()))
            .collect();
        out.sort_by_key(|(i, _)| *i);
        out
    }

    pub fn add_node(&mut self, id: &str) -> OpResult<()> {
        if self.contains(id) {
            return Err(OpError::DuplicateNode(id.to_string()));
        }
        self.g.add_node(GraphNode {
            id: id.to_string(),
            location: Pos2::ZERO,
        });
        self.relayout();
        Ok(())
    }

    /// Adds the ordered edge `from → to` and returns its index.
    pub fn add_edge(&mut self, from: &str, to: &str) -> OpResult<usize> {
        let (Some(a), Some(b)) = (self.index_of(from), self.index_of(to)) else {
            return Err(OpError::MissingEndpoint {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        if self.g.find_edge(a, b).is_some() {
            return Err(OpError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let e = self.g.add_edge(a, b, GraphEdge);
        self.relayout();
        Ok(e.index())
    }

    /// Node ids in visit order of the last (or running) traversal.
    pub fn traversal(&self) -> &[String] {
        &self.traversal
    }

    /// Edges highlighted by the running traversal.
    pub fn traversed_edges(&self) -> &[usize] {
        &self.traversed_edges
    }

    pub(crate) fn set_traversal_frame(&mut self, visited: Vec<String>, edges: Vec<usize>) {
        self.traversal = visited;
        self.traversed_edges = edges;
    }

    pub(crate) fn clear_traversed_edges(&mut self) {
        self.traversed_edges.clear();
    }

    /// Recomputes every node location from topology alone.
    pub fn relayout(&mut self) {
        self.relayout_with(&forest::State::default());
    }

    pub fn relayout_with(&mut self, state: &forest::State) {
        for (idx, loc) in forest::layout(&self.g, state) {
            self.g[idx].location = loc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> GraphModel {
        GraphModel::from_parts(["A", "B", "C"], [("A", "B"), ("A", "C"), ("B", "C")])
    }

    #[test]
    fn test_add_node_rejects_duplicates() {
        let mut g = abc();
        assert_eq!(g.add_node("A"), Err(OpError::DuplicateNode("A".to_string())));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.add_node("D"), Ok(()));
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn test_add_edge_preconditions() {
        let mut g = abc();
        assert!(matches!(
            g.add_edge("A", "Z"),
            Err(OpError::MissingEndpoint { .. })
        ));
        assert!(matches!(
            g.add_edge("A", "B"),
            Err(OpError::DuplicateEdge { .. })
        ));
        // reverse direction is a different ordered pair
        assert_eq!(g.add_edge("B", "A"), Ok(3));
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_edges_in_insertion_order() {
        let g = abc();
        assert_eq!(
            g.edges(),
            vec![(0, "A", "B"), (1, "A", "C"), (2, "B", "C")]
        );
        let a = g.index_of("A").unwrap();
        let targets: Vec<_> = g.out_edges(a).iter().map(|(_, t)| g.id(*t)).collect();
        assert_eq!(targets, vec!["B", "C"]);
    }

    #[test]
    fn test_layout_refreshed_on_change() {
        let mut g = GraphModel::from_parts(["A"], Vec::<(&str, &str)>::new());
        let before = g.location("A").unwrap();
        g.add_node("B").unwrap();
        assert_ne!(g.location("A").unwrap(), before);
    }
}
