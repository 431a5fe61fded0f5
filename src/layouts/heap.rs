use egui::Pos2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    /// Location of slot 0.
    pub root: Pos2,
    /// Vertical distance between levels.
    pub level_height: f32,
    /// Horizontal extent shared by every level.
    pub width: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            root: Pos2::new(400., 60.),
            level_height: 90.,
            width: 800.,
        }
    }
}

/// Depth of slot `i` in a complete binary tree.
pub fn level_of(i: usize) -> u32 {
    (i + 1).ilog2()
}

/// Slot `i` sits on level `floor(log2(i + 1))`, evenly spaced among the
/// `2^level` slots of that level.
pub fn position(i: usize, state: &State) -> Pos2 {
    if i == 0 {
        return state.root;
    }
    let level = level_of(i);
    let slots = 1usize << level;
    let offset = i - (slots - 1);
    let step = state.width / (slots as f32 + 1.);
    Pos2::new(
        step * (offset as f32 + 1.),
        state.root.y + level as f32 * state.level_height,
    )
}

pub fn positions(len: usize, state: &State) -> Vec<Pos2> {
    (0..len).map(|i| position(i, state)).collect()
}
