//! Layout for a directed graph seen as a forest of weakly connected components.
//!
//! The canvas is split into equal vertical bands, one per component, in the
//! order their first node was inserted. A component that is a rooted tree is
//! drawn level by level from its root; any other component is drawn on a
//! circle inside its band.

use egui::{Pos2, Vec2};
use petgraph::{
    stable_graph::{NodeIndex, StableGraph},
    visit::EdgeRef,
    Directed, Direction,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use super::circular;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub canvas: Vec2,
    /// Horizontal padding on both sides of the canvas.
    pub margin: f32,
    /// y of the root level of tree components.
    pub top: f32,
    /// Height kept free below tree levels.
    pub bottom_reserve: f32,
    /// Circle radius is `min(band width, canvas height) / radius_divisor`.
    pub radius_divisor: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            canvas: Vec2::new(800., 400.),
            margin: 40.,
            top: 80.,
            bottom_reserve: 120.,
            radius_divisor: 2.5,
        }
    }
}

/// Weakly connected components, each listed in node insertion order and
/// ordered by their earliest node.
pub fn components<N, E>(g: &StableGraph<N, E, Directed>) -> Vec<Vec<NodeIndex>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for start in g.node_indices() {
        if !seen.insert(start) {
            continue;
        }
        let mut comp = vec![start];
        let mut stack = vec![start];
        while let Some(n) = stack.pop() {
            for m in g.neighbors_undirected(n) {
                if seen.insert(m) {
                    comp.push(m);
                    stack.push(m);
                }
            }
        }
        comp.sort();
        out.push(comp);
    }
    out
}

/// Root of `comp` if the component is a rooted tree: `n - 1` edges, no node
/// with two parents and exactly one node without a parent.
pub fn tree_root<N, E>(g: &StableGraph<N, E, Directed>, comp: &[NodeIndex]) -> Option<NodeIndex> {
    let edges: usize = comp
        .iter()
        .map(|&n| g.edges_directed(n, Direction::Outgoing).count())
        .sum();
    if edges + 1 != comp.len() {
        return None;
    }
    let mut root = None;
    for &n in comp {
        let parents = g.edges_directed(n, Direction::Incoming).count();
        if parents > 1 || (parents == 0 && root.is_some()) {
            return None;
        }
        if parents == 0 {
            root = Some(n);
        }
    }
    root
}

/// Breadth-first levels from `root`, children in edge insertion order.
fn levels<N, E>(g: &StableGraph<N, E, Directed>, root: NodeIndex) -> Vec<Vec<NodeIndex>> {
    let mut levels: Vec<Vec<NodeIndex>> = Vec::new();
    let mut seen = HashSet::from([root]);
    let mut queue = VecDeque::from([(root, 0usize)]);
    while let Some((n, depth)) = queue.pop_front() {
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(n);
        let mut children: Vec<_> = g
            .edges_directed(n, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        children.sort_by_key(|(e, _)| *e);
        for (_, child) in children {
            if seen.insert(child) {
                queue.push_back((child, depth + 1));
            }
        }
    }
    levels
}

pub fn layout<N, E>(g: &StableGraph<N, E, Directed>, state: &State) -> Vec<(NodeIndex, Pos2)> {
    let comps = components(g);
    let band = (state.canvas.x - 2. * state.margin) / comps.len().max(1) as f32;
    let mut out = Vec::with_capacity(g.node_count());

    for (ci, comp) in comps.iter().enumerate() {
        let left = state.margin + ci as f32 * band;
        match tree_root(g, comp) {
            Some(root) => {
                let levels = levels(g, root);
                let level_height =
                    (state.canvas.y - state.bottom_reserve) / levels.len() as f32;
                for (l, nodes) in levels.iter().enumerate() {
                    let step = band / (nodes.len() as f32 + 1.);
                    for (i, &n) in nodes.iter().enumerate() {
                        let pos = Pos2::new(
                            left + step * (i as f32 + 1.),
                            state.top + l as f32 * level_height,
                        );
                        out.push((n, pos));
                    }
                }
            }
            None => {
                let center = Pos2::new(left + band / 2., state.canvas.y / 2.);
                let radius = band.min(state.canvas.y) / state.radius_divisor;
                let points = circular::positions(comp.len(), center, radius);
                out.extend(comp.iter().copied().zip(points));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> StableGraph<(), (), Directed> {
        let mut g = StableGraph::new();
        let idx: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
        for &(a, b) in edges {
            g.add_edge(idx[a], idx[b], ());
        }
        g
    }

    fn pos_of(layout: &[(NodeIndex, Pos2)], i: usize) -> Pos2 {
        layout
            .iter()
            .find(|(n, _)| n.index() == i)
            .map(|(_, p)| *p)
            .unwrap()
    }

    #[test]
    fn test_components_in_insertion_order() {
        let g = graph(5, &[(0, 1), (3, 2)]);
        let comps = components(&g);
        let as_ix: Vec<Vec<usize>> = comps
            .iter()
            .map(|c| c.iter().map(|n| n.index()).collect())
            .collect();
        assert_eq!(as_ix, vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn test_tree_detection() {
        let chain = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(
            tree_root(&chain, &components(&chain)[0]).map(|n| n.index()),
            Some(0)
        );
        // two parents
        let v = graph(3, &[(0, 2), (1, 2)]);
        assert_eq!(tree_root(&v, &components(&v)[0]), None);
        let cycle = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(tree_root(&cycle, &components(&cycle)[0]), None);
        let single = graph(1, &[]);
        assert!(tree_root(&single, &components(&single)[0]).is_some());
    }

    #[test]
    fn test_tree_component_levels() {
        // 0 → 1, 0 → 2, 1 → 3
        let g = graph(4, &[(0, 1), (0, 2), (1, 3)]);
        let l = layout(&g, &State::default());
        assert_eq!(l.len(), 4);
        assert_eq!(pos_of(&l, 0), Pos2::new(40. + 360., 80.));
        let level_height = 280. / 3.;
        assert_eq!(pos_of(&l, 1), Pos2::new(40. + 240., 80. + level_height));
        assert_eq!(pos_of(&l, 2), Pos2::new(40. + 480., 80. + level_height));
        assert_eq!(pos_of(&l, 3).y, 80. + 2. * level_height);
    }

    #[test]
    fn test_cycle_on_circle_in_own_band() {
        // 0 → 1 → 2 → 0, plus isolated 3
        let g = graph(4, &[(0, 1), (1, 2), (2, 0)]);
        let l = layout(&g, &State::default());
        let center = Pos2::new(40. + 180., 200.);
        let radius = 360. / 2.5;
        for i in 0..3 {
            assert!(((pos_of(&l, i) - center).length() - radius).abs() < 1e-3);
        }
        assert!((pos_of(&l, 0) - Pos2::new(center.x + radius, 200.)).length() < 1e-3);
        assert_eq!(pos_of(&l, 3), Pos2::new(40. + 360. + 180., 80.));
    }

    #[test]
    fn test_deterministic() {
        let g = graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5)]);
        let s = State::default();
        assert_eq!(layout(&g, &s), layout(&g, &s));
    }

    #[test]
    fn test_empty_graph() {
        let g = graph(0, &[]);
        assert!(layout(&g, &State::default()).is_empty());
    }
}
