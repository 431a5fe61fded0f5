use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::model::TreeNode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub root: Pos2,
    pub level_height: f32,
    /// Horizontal child offset at level `spread_levels`; doubles for each level
    /// above it and halves for each level below.
    pub spacing: f32,
    pub spread_levels: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            root: Pos2::new(400., 50.),
            level_height: 80.,
            spacing: 30.,
            spread_levels: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub value: i64,
    pub pos: Pos2,
}

/// Node positions in pre-order plus parent → child links.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    pub nodes: Vec<PlacedNode>,
    pub links: Vec<[Pos2; 2]>,
}

impl TreeLayout {
    pub fn position_of(&self, value: i64) -> Option<Pos2> {
        self.nodes.iter().find(|n| n.value == value).map(|n| n.pos)
    }
}

fn offset(level: i32, state: &State) -> f32 {
    state.spacing * 2f32.powi(state.spread_levels - level)
}

pub fn layout(root: Option<&TreeNode>, state: &State) -> TreeLayout {
    fn place(node: &TreeNode, pos: Pos2, level: i32, state: &State, out: &mut TreeLayout) {
        out.nodes.push(PlacedNode {
            value: node.value,
            pos,
        });
        let dx = offset(level, state);
        let children = [(node.left.as_deref(), -dx), (node.right.as_deref(), dx)];
        for (child, dx) in children {
            if let Some(child) = child {
                let child_pos = Pos2::new(pos.x + dx, pos.y + state.level_height);
                out.links.push([pos, child_pos]);
                place(child, child_pos, level + 1, state, out);
            }
        }
    }

    let mut out = TreeLayout::default();
    if let Some(root) = root {
        place(root, state.root, 0, state, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BstModel;

    #[test]
    fn test_children_offset_halves_per_level() {
        let t = BstModel::from_values([50, 30, 70, 20, 80]);
        let l = layout(t.root(), &State::default());
        assert_eq!(l.position_of(50), Some(Pos2::new(400., 50.)));
        assert_eq!(l.position_of(30), Some(Pos2::new(160., 130.)));
        assert_eq!(l.position_of(70), Some(Pos2::new(640., 130.)));
        assert_eq!(l.position_of(20), Some(Pos2::new(40., 210.)));
        assert_eq!(l.position_of(80), Some(Pos2::new(760., 210.)));
        assert_eq!(l.links.len(), 4);
    }

    #[test]
    fn test_empty_tree() {
        let l = layout(None, &State::default());
        assert!(l.nodes.is_empty());
        assert!(l.links.is_empty());
    }
}
