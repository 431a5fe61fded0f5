use egui::{Align2, Vec2};

use super::{palette, placeholder, Diagram};
use crate::layouts::tree;
use crate::model::BstModel;

const RADIUS: f32 = 25.;

pub(super) fn render(model: &BstModel, size: Vec2) -> Diagram {
    if model.is_empty() {
        return placeholder(size, size.y / 2., "Empty Tree");
    }
    let layout = tree::layout(model.root(), &tree::State::default());
    let mut d = Diagram::new(size);
    for [parent, child] in &layout.links {
        d.line(
            *parent + Vec2::new(0., RADIUS),
            *child - Vec2::new(0., RADIUS),
            palette::outline(),
        );
    }
    for node in &layout.nodes {
        let fill = if model.highlighted() == Some(node.value) {
            palette::YELLOW
        } else {
            palette::PURPLE
        };
        d.circle(node.pos, RADIUS, fill, palette::outline());
        d.text(
            node.pos,
            Align2::CENTER_CENTER,
            node.value.to_string(),
            16.,
            palette::WHITE,
        );
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shape;

    #[test]
    fn test_links_drawn_before_nodes() {
        let m = BstModel::from_values([50, 30, 70]);
        let d = render(&m, Vec2::new(800., 400.));
        assert!(matches!(d.shapes[0], Shape::Line { .. }));
        assert!(matches!(d.shapes[1], Shape::Line { .. }));
        assert_eq!(d.texts(), vec!["50", "30", "70"]);
    }
}
