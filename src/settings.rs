use std::time::Duration;

use egui::Vec2;
use serde::{Deserialize, Serialize};

/// Logical drawing surface sizes. Diagrams are produced in these coordinates
/// and scaled by the display surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsCanvas {
    /// Canvas used by every variant except the hash table
    pub default_size: Vec2,

    /// Wider, shorter canvas for the horizontal bucket row
    pub hash_table_size: Vec2,
}

impl Default for SettingsCanvas {
    fn default() -> Self {
        Self {
            default_size: Vec2::new(800., 400.),
            hash_table_size: Vec2::new(1000., 220.),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub canvas: SettingsCanvas,

    /// Maximum number of entries kept in the operation log
    pub log_capacity: usize,

    /// Pause between two traversal frames
    pub step_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: SettingsCanvas::default(),
            log_capacity: 10,
            step_delay: Duration::from_millis(600),
        }
    }
}

impl Settings {
    pub fn with_canvas(mut self, canvas: SettingsCanvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }
}
