use egui::{Align2, Pos2, Rect, Stroke, Vec2};

use super::{palette, placeholder, Diagram};
use crate::model::LinkedListModel;

pub(super) const NODE: Vec2 = Vec2::new(80., 50.);
pub(super) const SPACING: f32 = 120.;
pub(super) const START: Pos2 = Pos2::new(50., 200.);

pub(super) fn node_rect(i: usize) -> Rect {
    Rect::from_min_size(Pos2::new(START.x + i as f32 * SPACING, START.y), NODE)
}

/// Node boxes with their values plus HEAD/TAIL labels.
pub(super) fn draw_nodes(d: &mut Diagram, values: impl Iterator<Item = i64>, highlighted: Option<usize>) {
    let mut count = 0;
    for (i, value) in values.enumerate() {
        let rect = node_rect(i);
        let fill = if highlighted == Some(i) {
            palette::YELLOW
        } else {
            palette::ORANGE
        };
        d.rect(rect, 5., fill, palette::outline());
        d.text(
            rect.center(),
            Align2::CENTER_CENTER,
            value.to_string(),
            16.,
            palette::WHITE,
        );
        count += 1;
    }
    if count == 0 {
        return;
    }
    let head = node_rect(0);
    let tail = node_rect(count - 1);
    for (rect, label) in [(head, "HEAD"), (tail, "TAIL")] {
        d.text(
            Pos2::new(rect.center().x, START.y - 10.),
            Align2::CENTER_BOTTOM,
            label,
            14.,
            palette::ORANGE,
        );
    }
}

/// Horizontal pointer arrow between neighbors `i` and `i + 1` at height `y`.
pub(super) fn link(d: &mut Diagram, i: usize, y: f32, backwards: bool, label: &str) {
    let (left, right) = (node_rect(i).right(), node_rect(i + 1).left());
    let color = if backwards { palette::GREEN } else { palette::BLUE };
    let (from, to) = if backwards {
        (Pos2::new(right, y), Pos2::new(left, y))
    } else {
        (Pos2::new(left, y), Pos2::new(right, y))
    };
    d.arrow(from, to, Stroke::new(2., color));
    let label_y = if backwards { y + 18. } else { y - 8. };
    d.text(
        Pos2::new((left + right) / 2., label_y),
        Align2::CENTER_BOTTOM,
        label,
        10.,
        color,
    );
}

pub(super) fn render(model: &LinkedListModel, size: Vec2) -> Diagram {
    if model.is_empty() {
        return placeholder(size, START.y, "Empty Linked List");
    }
    let mut d = Diagram::new(size);
    for (i, node) in model.nodes().iter().enumerate() {
        if node.next.is_some() {
            link(&mut d, i, START.y + NODE.y / 2., false, "next");
        }
    }
    draw_nodes(
        &mut d,
        model.nodes().iter().map(|n| n.value),
        model.highlighted(),
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shape;

    #[test]
    fn test_one_arrow_per_link() {
        let m = LinkedListModel::from_values([1, 2, 3]);
        let d = render(&m, Vec2::new(800., 400.));
        let arrows = d
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Arrow { .. }))
            .count();
        assert_eq!(arrows, 2);
        let texts = d.texts();
        assert!(texts.contains(&"HEAD"));
        assert!(texts.contains(&"TAIL"));
    }
}
