use egui::{Align2, Vec2};

use super::{palette, placeholder, Diagram};
use crate::layouts::heap;
use crate::model::HeapModel;

const RADIUS: f32 = 28.;

pub(super) fn render(model: &HeapModel, size: Vec2) -> Diagram {
    let entries = model.entries();
    if entries.is_empty() {
        return placeholder(size, size.y / 2., "Empty Priority Queue");
    }
    let positions = heap::positions(entries.len(), &heap::State::default());
    let mut d = Diagram::new(size);
    for (i, pos) in positions.iter().enumerate() {
        for child in [2 * i + 1, 2 * i + 2] {
            if let Some(child_pos) = positions.get(child) {
                d.line(
                    *pos + Vec2::new(0., RADIUS),
                    *child_pos - Vec2::new(0., RADIUS),
                    palette::outline(),
                );
            }
        }
    }
    for (i, (entry, pos)) in entries.iter().zip(&positions).enumerate() {
        let (fill, label) = if model.highlighted() == Some(i) {
            (palette::YELLOW, palette::DARK)
        } else {
            (palette::CYAN, palette::YELLOW)
        };
        d.circle(*pos, RADIUS, fill, palette::outline());
        d.text(
            *pos - Vec2::new(0., 6.),
            Align2::CENTER_CENTER,
            entry.value.to_string(),
            18.,
            palette::WHITE,
        );
        d.text(
            *pos + Vec2::new(0., 14.),
            Align2::CENTER_CENTER,
            format!("P:{}", entry.priority),
            12.,
            label,
        );
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeapEntry;
    use crate::render::Shape;

    #[test]
    fn test_parent_child_lines() {
        let m = HeapModel::from_entries([
            HeapEntry::new(40, 40),
            HeapEntry::new(30, 30),
            HeapEntry::new(20, 20),
            HeapEntry::new(10, 10),
        ]);
        let d = render(&m, Vec2::new(800., 400.));
        let lines = d
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
            .count();
        assert_eq!(lines, 3);
        assert!(d.texts().contains(&"P:40"));
    }
}
