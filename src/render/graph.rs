use egui::{Align2, Stroke, Vec2};

use super::{palette, placeholder, Diagram};
use crate::model::GraphModel;

const RADIUS: f32 = 28.;

pub(super) fn render(model: &GraphModel, size: Vec2) -> Diagram {
    if model.is_empty() {
        return placeholder(size, size.y / 2., "Empty Graph");
    }
    let mut d = Diagram::new(size);
    for (i, from, to) in model.edges() {
        let (Some(a), Some(b)) = (model.location(from), model.location(to)) else {
            continue;
        };
        let color = if model.traversed_edges().contains(&i) {
            palette::YELLOW
        } else {
            palette::GRAY
        };
        let dir = (b - a).normalized();
        if dir.length() > 0. {
            d.arrow(a + dir * RADIUS, b - dir * RADIUS, Stroke::new(4., color));
        }
    }
    let visited = model.traversal();
    for node in model.nodes() {
        let fill = if visited.contains(&node.id) {
            palette::GREEN
        } else {
            palette::BLUE
        };
        d.circle(node.location, RADIUS, fill, palette::outline());
        d.text(
            node.location,
            Align2::CENTER_CENTER,
            node.id.clone(),
            18.,
            palette::WHITE,
        );
    }
    d
}
