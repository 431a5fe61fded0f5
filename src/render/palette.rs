use egui::{Color32, Stroke};

pub const BLUE: Color32 = Color32::from_rgb(0x0d, 0x6e, 0xfd);
pub const LIGHT_BLUE: Color32 = Color32::from_rgb(0x4d, 0xab, 0xf7);
pub const YELLOW: Color32 = Color32::from_rgb(0xff, 0xc1, 0x07);
pub const GREEN: Color32 = Color32::from_rgb(0x20, 0xc9, 0x97);
pub const SUCCESS: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);
pub const TEAL: Color32 = Color32::from_rgb(0x17, 0xa2, 0xb8);
pub const CYAN: Color32 = Color32::from_rgb(0x0d, 0xca, 0xf0);
pub const ORANGE: Color32 = Color32::from_rgb(0xfd, 0x7e, 0x14);
pub const PURPLE: Color32 = Color32::from_rgb(0x6f, 0x42, 0xc1);
pub const RED: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);
pub const GRAY: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);
pub const DARK: Color32 = Color32::from_rgb(0x49, 0x50, 0x57);
pub const WHITE: Color32 = Color32::WHITE;

/// Default outline of cells and nodes.
pub fn outline() -> Stroke {
    Stroke::new(2., GRAY)
}
