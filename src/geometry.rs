//! Plain 2D value types and the Y-up frame used by the histogram.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in screen space (top-left origin, Y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

/// Local coordinate system anchored at `origin` with Y growing upward.
///
/// Canvas space grows downward, so `y_transform` subtracts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub origin: Point,
}

impl Frame {
    pub const fn new(origin: Point) -> Self {
        Self { origin }
    }

    pub fn x_transform(&self, x: f64) -> f64 {
        self.origin.x + x
    }

    pub fn y_transform(&self, y: f64) -> f64 {
        self.origin.y - y
    }

    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(self.x_transform(local.x), self.y_transform(local.y))
    }

    /// Screen rect for a box whose bottom-left corner sits at `local`
    /// and which extends `size.height` upward.
    pub fn rect_above(&self, local: Point, size: Size) -> Rect {
        let top_left = self.to_screen(Point::new(local.x, local.y + size.height));
        Rect::new(top_left, size)
    }
}
