//! Completion-time histogram: one bar per participant, scaled against the
//! shared time range.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Participant;
use crate::config::{BarStyle, HistogramLayout, StatisticsLayout};
use crate::error::Result;
use crate::geometry::{Frame, Point, Rect, Size};
use crate::surface::{Rgba, Surface};

/// Bars are measured from this fraction of the fastest time, so the fastest
/// bar is never zero-height.
pub const VALUE_OFFSET_RATIO: f64 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BarKind {
    Player,
    Member,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistogramBar {
    pub header: String,
    pub value: f64,
    pub width: f64,
    pub distance: f64,
    pub kind: BarKind,
    pub color: Rgba,
}

impl HistogramBar {
    fn new(participant: &Participant, style: &BarStyle, kind: BarKind, max_value: f64) -> Self {
        let opacity = match kind {
            BarKind::Player => style.color.a,
            BarKind::Member => participant.time / max_value,
        };
        Self {
            header: participant.name.clone(),
            value: participant.time,
            width: style.width,
            distance: style.distance,
            kind,
            color: style.color.with_alpha(opacity),
        }
    }

    pub fn opacity(&self) -> f64 {
        self.color.a
    }

    /// CSS fill for the bar.
    pub fn background(&self) -> String {
        self.color.to_string()
    }

    /// The value as printed above the bar.
    pub fn label(&self) -> String {
        format!("{:.0}", self.value.round())
    }
}

/// Screen placement of one bar and its two captions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub rect: Rect,
    pub header_at: Point,
    pub value_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    pub layout: HistogramLayout,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub bars: Vec<HistogramBar>,
}

/// Smallest and largest time, or `None` when there is nothing to scan.
/// NaN times take no part in the range.
pub fn value_range(participants: &[Participant]) -> Option<(f64, f64)> {
    participants
        .iter()
        .map(|p| p.time)
        .filter(|t| !t.is_nan())
        .fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((if t < lo { t } else { lo }, if hi < t { t } else { hi })),
        })
}

impl Histogram {
    pub fn build(layout: &StatisticsLayout, participants: &[Participant]) -> Self {
        let range = value_range(participants);
        let max_value = range.map_or(0.0, |(_, hi)| hi);
        let bars = participants
            .iter()
            .map(|p| {
                let (style, kind) = if p.is_player {
                    (&layout.player_bar, BarKind::Player)
                } else {
                    (&layout.member_bar, BarKind::Member)
                };
                HistogramBar::new(p, style, kind, max_value)
            })
            .collect();

        let histogram = Histogram {
            layout: layout.histogram.clone(),
            min_value: range.map(|(lo, _)| lo),
            max_value: range.map(|(_, hi)| hi),
            bars,
        };
        if histogram.is_degenerate() {
            log::warn!(
                "degenerate histogram range (min {:?}, max {:?}); bar heights are not finite",
                histogram.min_value,
                histogram.max_value
            );
        }
        histogram
    }

    pub fn value_offset(&self) -> f64 {
        VALUE_OFFSET_RATIO * self.min_value.unwrap_or(0.0)
    }

    /// Pixels per unit of time. Not finite when `max == 0.75 * min`.
    pub fn step(&self) -> f64 {
        self.layout.height / (self.max_value.unwrap_or(0.0) - self.value_offset())
    }

    pub fn is_degenerate(&self) -> bool {
        !self.bars.is_empty() && !self.step().is_finite()
    }

    pub fn bar_height(&self, value: f64) -> f64 {
        (value - self.value_offset()) * self.step()
    }

    /// Y-up frame at the histogram origin. Bars stand on the line
    /// `line_height` above it; headers sit on the origin line.
    pub fn frame(&self) -> Frame {
        Frame::new(self.layout.origin)
    }

    /// Left-to-right placement of every bar.
    pub fn bar_geometry(&self) -> Vec<BarGeometry> {
        let frame = self.frame();
        let baseline = self.layout.line_height;
        let mut indent = 0.0;
        let mut out = Vec::with_capacity(self.bars.len());
        for bar in &self.bars {
            let x = indent + bar.distance;
            let height = self.bar_height(bar.value);
            out.push(BarGeometry {
                rect: frame.rect_above(Point::new(x, baseline), Size::new(bar.width, height)),
                header_at: frame.to_screen(Point::new(x, 0.0)),
                value_at: frame.to_screen(Point::new(
                    x,
                    baseline + height + self.layout.line_offset,
                )),
            });
            indent += bar.width + 2.0 * bar.distance;
        }
        out
    }
}

pub fn render_histogram<S: Surface + ?Sized>(surface: &mut S, histogram: &Histogram) -> Result<()> {
    for (bar, geometry) in histogram.bars.iter().zip(histogram.bar_geometry()) {
        surface.set_fill_style(&bar.background());
        surface.fill_rect(geometry.rect);

        surface.set_fill_style(&histogram.layout.foreground);
        surface.set_font(&histogram.layout.font);
        surface.fill_text(&bar.header, geometry.header_at)?;
        surface.fill_text(&bar.label(), geometry.value_at)?;
    }
    Ok(())
}
