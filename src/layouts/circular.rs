use egui::{Pos2, Vec2};

/// `count` points evenly spaced on a circle, the first one at angle 0
/// (to the right of `center`), continuing clockwise in screen space.
pub fn positions(count: usize, center: Pos2, radius: f32) -> Vec<Pos2> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * (i as f32) / (count as f32);
            center + radius * Vec2::angled(angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_on_circle() {
        let center = Pos2::new(100., 100.);
        let pts = positions(4, center, 10.);
        assert_eq!(pts.len(), 4);
        for p in &pts {
            assert!(((*p - center).length() - 10.).abs() < 1e-4);
        }
        assert!((pts[0] - Pos2::new(110., 100.)).length() < 1e-4);
        assert!((pts[1] - Pos2::new(100., 110.)).length() < 1e-4);
    }

    #[test]
    fn test_no_points() {
        assert!(positions(0, Pos2::ZERO, 5.).is_empty());
    }
}
