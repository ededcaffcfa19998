// Shared helpers for native integration tests.

use wizard_views::ViewError;
use wizard_views::geometry::{Point, Rect};
use wizard_views::surface::Surface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    FillStyle(String),
    Font(String),
    FillRect(Rect),
    StrokeRect(Rect),
    FillText(String, Point),
}

/// Surface that remembers every call. `fail_text_after` makes the n-th
/// `fill_text` (0-based) fail, mimicking a throwing canvas.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    pub fail_text_after: Option<usize>,
    texts: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at_text(n: usize) -> Self {
        Self {
            fail_text_after: Some(n),
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillText(t, p) => Some((t.as_str(), *p)),
                _ => None,
            })
            .collect()
    }

    pub fn filled_rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::FillStyle(style.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::Font(font.to_string()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(Op::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(Op::StrokeRect(rect));
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), ViewError> {
        if self.fail_text_after == Some(self.texts) {
            return Err(ViewError::Js("fillText failed".to_string()));
        }
        self.texts += 1;
        self.ops.push(Op::FillText(text.to_string(), at));
        Ok(())
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn approx_rect(r: Rect, x: f64, y: f64, w: f64, h: f64) -> bool {
    approx(r.x(), x) && approx(r.y(), y) && approx(r.width(), w) && approx(r.height(), h)
}
