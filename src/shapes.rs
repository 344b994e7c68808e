//! Shape primitives.
//!
//! Every shape is a small `Copy` value. "Mutation" (translation, reversal) returns a
//! new value, so shapes can be constructed per query on the stack and thrown away.
//!
//! - **Circle**: origin and radius
//! - **Line**: finite segment between two points (degenerate when both are equal)
//! - **Ray**: origin and unit direction, unbounded
//! - **Rect**: axis-aligned, `min` corner plus signed `size`
//! - **Capsule**: a segment swept by a disc

use serde::{Deserialize, Serialize};

use crate::fixed_math::FixedVec2;

pub mod capsule;
pub mod circle;
pub mod line;
pub mod ray;
pub mod rect;


pub use capsule::Capsule;
pub use circle::Circle;
pub use line::Line;
pub use ray::Ray;
pub use rect::Rect;

/// Shapes with a finite axis-aligned bounding rectangle.
///
/// Every point of the shape lies inside `bounds()` (boundary inclusive).
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

/// Any of the primitive shapes, for callers that store heterogeneous geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Line(Line),
    Ray(Ray),
    Rect(Rect),
    Capsule(Capsule),
}

impl Shape {
    /// Bounding rect, or `None` for the unbounded ray.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Circle(c) => Some(c.bounds()),
            Shape::Line(l) => Some(l.bounds()),
            Shape::Ray(_) => None,
            Shape::Rect(r) => Some(r.bounds()),
            Shape::Capsule(c) => Some(c.bounds()),
        }
    }

    pub fn translated(&self, offset: FixedVec2) -> Self {
        match self {
            Shape::Circle(c) => Shape::Circle(c.translated(offset)),
            Shape::Line(l) => Shape::Line(l.translated(offset)),
            Shape::Ray(r) => Shape::Ray(r.translated(offset)),
            Shape::Rect(r) => Shape::Rect(r.translated(offset)),
            Shape::Capsule(c) => Shape::Capsule(c.translated(offset)),
        }
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl From<Line> for Shape {
    fn from(value: Line) -> Self {
        Shape::Line(value)
    }
}

impl From<Ray> for Shape {
    fn from(value: Ray) -> Self {
        Shape::Ray(value)
    }
}

impl From<Rect> for Shape {
    fn from(value: Rect) -> Self {
        Shape::Rect(value)
    }
}

impl From<Capsule> for Shape {
    fn from(value: Capsule) -> Self {
        Shape::Capsule(value)
    }
}
