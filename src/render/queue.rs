use egui::{Align2, Pos2, Rect, Vec2};

use super::{palette, placeholder, Diagram};
use crate::model::QueueModel;

const CELL: Vec2 = Vec2::new(60., 50.);
const START: Pos2 = Pos2::new(50., 150.);

pub(super) fn render(model: &QueueModel, size: Vec2) -> Diagram {
    let data = model.elements();
    if data.is_empty() {
        return placeholder(size, size.y / 2., "Empty Queue");
    }
    let mut d = Diagram::new(size);
    let (front, rear) = (model.front_index(), model.rear_index());
    let center_x = |i: usize| START.x + i as f32 * CELL.x + CELL.x / 2.;
    for (i, value) in data.iter().enumerate() {
        let rect = Rect::from_min_size(
            Pos2::new(START.x + i as f32 * CELL.x, START.y),
            Vec2::new(CELL.x - 2., CELL.y),
        );
        let fill = if i == front {
            palette::YELLOW
        } else if i == rear {
            palette::TEAL
        } else {
            palette::SUCCESS
        };
        d.rect(rect, 0., fill, palette::outline());
        d.text(
            Pos2::new(center_x(i), START.y + CELL.y / 2.),
            Align2::CENTER_CENTER,
            value.to_string(),
            16.,
            palette::WHITE,
        );
    }
    d.text(
        Pos2::new(center_x(front), START.y - 10.),
        Align2::CENTER_BOTTOM,
        "FRONT",
        14.,
        palette::YELLOW,
    );
    d.text(
        Pos2::new(center_x(rear), START.y + CELL.y + 20.),
        Align2::CENTER_BOTTOM,
        "REAR",
        14.,
        palette::TEAL,
    );
    d
}
