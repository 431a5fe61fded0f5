use egui::{
    emath::RectTransform, epaint, FontId, Painter, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, Ui, Vec2, Widget,
};

use crate::render::{Diagram, Shape};

const ARROW_ANGLE: f32 = std::f32::consts::TAU / 12.;

/// Paints a [`Diagram`] into the space available in the ui, scaled to fit.
pub struct DiagramView<'a> {
    diagram: &'a Diagram,
}

impl<'a> DiagramView<'a> {
    pub fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }
}

impl Widget for DiagramView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let to_screen = fit(self.diagram.size, response.rect);
        let scale = to_screen.scale().x;
        for shape in &self.diagram.shapes {
            paint(&painter, &to_screen, scale, shape);
        }
        response
    }
}

/// Maps the logical canvas into `screen`, keeping its aspect ratio and
/// centering the leftover space.
pub fn fit(canvas: Vec2, screen: Rect) -> RectTransform {
    let from = Rect::from_min_size(Pos2::ZERO, canvas);
    let scale = (screen.width() / canvas.x).min(screen.height() / canvas.y);
    let to = Rect::from_center_size(screen.center(), canvas * scale);
    RectTransform::from_to(from, to)
}

fn scaled(stroke: Stroke, scale: f32) -> Stroke {
    Stroke::new(stroke.width * scale, stroke.color)
}

fn paint(painter: &Painter, t: &RectTransform, scale: f32, shape: &Shape) {
    match shape {
        Shape::Rect {
            rect,
            rounding,
            fill,
            stroke,
        } => {
            painter.rect(
                t.transform_rect(*rect),
                rounding * scale,
                *fill,
                scaled(*stroke, scale),
                StrokeKind::Middle,
            );
        }
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            painter.circle(
                t.transform_pos(*center),
                radius * scale,
                *fill,
                scaled(*stroke, scale),
            );
        }
        Shape::Line { points, stroke } => {
            painter.line_segment(
                [t.transform_pos(points[0]), t.transform_pos(points[1])],
                scaled(*stroke, scale),
            );
        }
        Shape::Arrow {
            from,
            to,
            stroke,
            tip_size,
        } => {
            let start = t.transform_pos(*from);
            let end = t.transform_pos(*to);
            let stroke = scaled(*stroke, scale);
            let size = tip_size * scale;
            let dir = (end - start).normalized();

            // line stops where the tip begins
            painter.line_segment([start, end - size * dir], stroke);
            let tip = vec![
                end,
                end - rotate_vector(dir, ARROW_ANGLE) * size,
                end - rotate_vector(dir, -ARROW_ANGLE) * size,
            ];
            painter.add(epaint::Shape::convex_polygon(
                tip,
                stroke.color,
                Stroke::NONE,
            ));
        }
        Shape::Path { points, stroke } => {
            let points = points.iter().map(|p| t.transform_pos(*p)).collect();
            painter.add(epaint::Shape::line(points, scaled(*stroke, scale)));
        }
        Shape::Text {
            pos,
            anchor,
            text,
            size,
            color,
        } => {
            painter.text(
                t.transform_pos(*pos),
                *anchor,
                text,
                FontId::proportional(size * scale),
                *color,
            );
        }
    }
}

/// rotates vector by angle
fn rotate_vector(vec: Vec2, angle: f32) -> Vec2 {
    let cos = angle.cos();
    let sin = angle.sin();
    Vec2::new(cos * vec.x - sin * vec.y, sin * vec.x + cos * vec.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_letterboxes_wide_screen() {
        let t = fit(
            Vec2::new(800., 400.),
            Rect::from_min_size(Pos2::ZERO, Vec2::new(1000., 400.)),
        );
        assert_eq!(t.transform_pos(Pos2::ZERO), Pos2::new(100., 0.));
        assert_eq!(t.transform_pos(Pos2::new(800., 400.)), Pos2::new(900., 400.));
    }

    #[test]
    fn test_fit_scales_down() {
        let t = fit(
            Vec2::new(800., 400.),
            Rect::from_min_size(Pos2::new(10., 10.), Vec2::new(400., 400.)),
        );
        assert_eq!(t.scale(), Vec2::splat(0.5));
        assert_eq!(t.transform_pos(Pos2::new(400., 200.)), Pos2::new(210., 210.));
    }
}
