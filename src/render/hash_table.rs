use egui::{Align2, Pos2, Rect, Stroke, Vec2};

use super::{palette, Diagram};
use crate::model::HashTableModel;

const BUCKET: Vec2 = Vec2::new(80., 50.);
const START: Pos2 = Pos2::new(60., 40.);
const GAP: f32 = 30.;
const PAIR_HEIGHT: f32 = 30.;
const PAIR_STEP: f32 = 38.;

/// Buckets side by side, each chain hanging below its bucket.
pub(super) fn render(model: &HashTableModel, size: Vec2) -> Diagram {
    let mut d = Diagram::new(size);
    let highlighted = model.highlighted();
    for (i, chain) in model.buckets().iter().enumerate() {
        let x = START.x + i as f32 * (BUCKET.x + GAP);
        let center_x = x + BUCKET.x / 2.;
        let bucket_hit = highlighted.is_some_and(|h| h.bucket == i);
        let fill = if bucket_hit { palette::YELLOW } else { palette::BLUE };
        d.rect(
            Rect::from_min_size(Pos2::new(x, START.y), BUCKET),
            0.,
            fill,
            palette::outline(),
        );
        d.text(
            Pos2::new(center_x, START.y - 10.),
            Align2::CENTER_BOTTOM,
            i.to_string(),
            18.,
            palette::GRAY,
        );
        for (j, pair) in chain.iter().enumerate() {
            let y = START.y + BUCKET.y + 15. + j as f32 * PAIR_STEP;
            let pair_hit = bucket_hit && highlighted.is_some_and(|h| h.key == pair.key);
            let fill = if pair_hit { palette::RED } else { palette::GREEN };
            d.rect(
                Rect::from_min_size(Pos2::new(x + 5., y), Vec2::new(BUCKET.x - 10., PAIR_HEIGHT)),
                0.,
                fill,
                Stroke::new(1.5, palette::WHITE),
            );
            d.text(
                Pos2::new(center_x, y + PAIR_HEIGHT / 2.),
                Align2::CENTER_CENTER,
                format!("{}:{}", pair.key, pair.value),
                13.,
                palette::WHITE,
            );
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shape;

    #[test]
    fn test_all_buckets_drawn_even_when_empty() {
        let d = render(&HashTableModel::default(), Vec2::new(1000., 220.));
        assert_eq!(d.texts(), (0..10).map(|i| i.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_searched_pair_is_red() {
        let mut m = HashTableModel::from_pairs([("10", "Aayush"), ("5", "Klein")]);
        m.search("10");
        let d = render(&m, Vec2::new(1000., 220.));
        let red = d
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { fill, .. } if *fill == palette::RED))
            .count();
        assert_eq!(red, 1);
        assert!(d.texts().contains(&"10:Aayush"));
    }
}
