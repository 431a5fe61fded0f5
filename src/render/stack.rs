use egui::{Align2, Pos2, Rect, Vec2};

use super::{palette, placeholder, Diagram};
use crate::model::StackModel;

const CELL: Vec2 = Vec2::new(80., 40.);
const START: Pos2 = Pos2::new(350., 50.);

/// Top of the stack is drawn first, at `START`, growing downwards.
pub(super) fn render(model: &StackModel, size: Vec2) -> Diagram {
    let data = model.elements();
    if data.is_empty() {
        return placeholder(size, size.y / 2., "Empty Stack");
    }
    let mut d = Diagram::new(size);
    let top = data.len() - 1;
    for (i, value) in data.iter().enumerate() {
        let y = START.y + (top - i) as f32 * CELL.y;
        let rect = Rect::from_min_size(Pos2::new(START.x, y), Vec2::new(CELL.x, CELL.y - 2.));
        let fill = if i == top { palette::YELLOW } else { palette::TEAL };
        d.rect(rect, 0., fill, palette::outline());
        d.text(
            Pos2::new(rect.center().x, y + CELL.y / 2.),
            Align2::CENTER_CENTER,
            value.to_string(),
            16.,
            palette::WHITE,
        );
    }
    d.text(
        Pos2::new(START.x + CELL.x + 20., START.y + CELL.y / 2.),
        Align2::LEFT_CENTER,
        "← TOP",
        16.,
        palette::YELLOW,
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shape;

    #[test]
    fn test_top_is_first_and_yellow() {
        let m = StackModel::from_values([1, 2, 3]);
        let d = render(&m, Vec2::new(800., 400.));
        let Shape::Rect { rect, fill, .. } = &d.shapes[4] else {
            panic!("expected the top cell");
        };
        assert_eq!(rect.min, START);
        assert_eq!(*fill, palette::YELLOW);
    }
}
