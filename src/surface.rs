//! Drawing seam between the view models and the 2D canvas.

use std::fmt;

use web_sys::CanvasRenderingContext2d;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// The handful of 2D primitives the views need.
pub trait Surface {
    fn set_fill_style(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_text(&mut self, text: &str, at: Point) -> Result<()>;
}

impl Surface for CanvasRenderingContext2d {
    fn set_fill_style(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_rect(&mut self, rect: Rect) {
        CanvasRenderingContext2d::fill_rect(self, rect.x(), rect.y(), rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect) {
        CanvasRenderingContext2d::stroke_rect(self, rect.x(), rect.y(), rect.width(), rect.height());
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<()> {
        CanvasRenderingContext2d::fill_text(self, text, at.x, at.y)?;
        Ok(())
    }
}

/// RGB triple plus alpha, printed as a CSS `rgba(...)` string.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
