use egui::{Align2, Color32, Pos2, Rect, Stroke, Vec2};
use serde::{Deserialize, Serialize};

/// One drawing primitive in logical canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect {
        rect: Rect,
        rounding: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Line {
        points: [Pos2; 2],
        stroke: Stroke,
    },
    /// Straight line ending in a filled tip at `to`.
    Arrow {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
        tip_size: f32,
    },
    /// Open polyline.
    Path {
        points: Vec<Pos2>,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Declarative picture of a structure for a fixed-size logical canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub size: Vec2,
    pub shapes: Vec<Shape>,
}

impl Diagram {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn rect(&mut self, rect: Rect, rounding: f32, fill: Color32, stroke: Stroke) {
        self.push(Shape::Rect {
            rect,
            rounding,
            fill,
            stroke,
        });
    }

    pub fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.push(Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    pub fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.push(Shape::Line {
            points: [from, to],
            stroke,
        });
    }

    pub fn arrow(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.push(Shape::Arrow {
            from,
            to,
            stroke,
            tip_size: 8.,
        });
    }

    pub fn text(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        text: impl Into<String>,
        size: f32,
        color: Color32,
    ) {
        self.push(Shape::Text {
            pos,
            anchor,
            text: text.into(),
            size,
            color,
        });
    }

    /// Every text label in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_placeholder(&self) -> bool {
        self.shapes.len() == 1 && matches!(self.shapes[0], Shape::Text { .. })
    }
}
