use egui::{Align2, Color32, Pos2, Rect, Stroke, Vec2};

use super::{palette, placeholder, Diagram};
use crate::model::ArrayModel;

const CELL: Vec2 = Vec2::new(70., 60.);
const START: Pos2 = Pos2::new(80., 180.);
const MAX_VISIBLE: usize = 12;

fn bracket(d: &mut Diagram, outer: f32, inner: f32) {
    let stroke = Stroke::new(3., palette::GRAY);
    let (top, bottom) = (START.y - 10., START.y + CELL.y + 10.);
    d.push(super::Shape::Path {
        points: vec![
            Pos2::new(outer, top),
            Pos2::new(inner, top),
            Pos2::new(inner, bottom),
            Pos2::new(outer, bottom),
        ],
        stroke,
    });
}

pub(super) fn render(model: &ArrayModel, size: Vec2) -> Diagram {
    let data = model.elements();
    if data.is_empty() {
        return placeholder(size, START.y, "Empty Array - Add elements to visualize");
    }
    let mut d = Diagram::new(size);
    let visible = data.len().min(MAX_VISIBLE);
    let end_x = START.x + visible as f32 * CELL.x;

    d.text(
        Pos2::new(START.x - 20., START.y - 30.),
        Align2::LEFT_BOTTOM,
        "Array",
        18.,
        palette::DARK,
    );
    bracket(&mut d, START.x - 15., START.x - 5.);
    bracket(&mut d, end_x + 15., end_x + 5.);

    for (i, value) in data.iter().take(MAX_VISIBLE).enumerate() {
        let x = START.x + i as f32 * CELL.x;
        let highlighted = model.highlighted() == Some(i);
        let (fill, stroke) = if highlighted {
            (palette::YELLOW, Stroke::new(4., palette::YELLOW))
        } else {
            (palette::BLUE, Stroke::new(2., palette::DARK))
        };
        d.rect(
            Rect::from_min_size(Pos2::new(x + 2., START.y + 2.), Vec2::new(CELL.x - 2., CELL.y)),
            8.,
            Color32::from_black_alpha(25),
            Stroke::NONE,
        );
        d.rect(
            Rect::from_min_size(Pos2::new(x, START.y), Vec2::new(CELL.x - 2., CELL.y)),
            8.,
            fill,
            stroke,
        );
        d.text(
            Pos2::new(x + CELL.x / 2., START.y + CELL.y / 2. + 2.),
            Align2::CENTER_CENTER,
            value.to_string(),
            18.,
            palette::WHITE,
        );
        d.text(
            Pos2::new(x + CELL.x / 2., START.y - 15.),
            Align2::CENTER_BOTTOM,
            i.to_string(),
            14.,
            palette::DARK,
        );
    }

    if data.len() > MAX_VISIBLE {
        d.text(
            Pos2::new(end_x + 30., START.y + CELL.y / 2.),
            Align2::LEFT_CENTER,
            format!("... +{} more", data.len() - MAX_VISIBLE),
            12.,
            palette::GRAY,
        );
    }
    d.text(
        Pos2::new(START.x, START.y + CELL.y + 25.),
        Align2::LEFT_BOTTOM,
        format!("Array Size: {}", data.len()),
        14.,
        palette::DARK,
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shape;

    #[test]
    fn test_truncates_after_twelve_cells() {
        let m = ArrayModel::from_values(0..15);
        let d = render(&m, Vec2::new(800., 400.));
        let texts = d.texts();
        assert!(texts.contains(&"... +3 more"));
        assert!(texts.contains(&"Array Size: 15"));
        assert!(texts.contains(&"11"));
        assert!(!texts.contains(&"12"));
    }

    #[test]
    fn test_highlighted_cell_is_yellow() {
        let mut m = ArrayModel::from_values([5, 2, 8]);
        m.search(2);
        let d = render(&m, Vec2::new(800., 400.));
        let yellow_cells = d
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { fill, .. } if *fill == palette::YELLOW))
            .count();
        assert_eq!(yellow_cells, 1);
    }
}
