//! End-of-level statistics view.
//!
//! The host hands over two positionally paired arrays, player names and
//! completion times in milliseconds. They are turned into [`Participant`]s,
//! then into a [`Cloud`] and a [`Histogram`] view model, and finally drawn on
//! any [`Surface`] (the browser canvas in production).
//!
//! When the arrays differ in length only the overlapping prefix is shown.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{PLAYER_NAME, StatisticsLayout};
use crate::error::Result;
use crate::surface::Surface;

pub mod cloud;
pub mod histogram;

pub use cloud::{Cloud, Message, Shape, render_cloud};
pub use histogram::{BarGeometry, BarKind, Histogram, HistogramBar, render_histogram};

/// One finished run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub name: String,
    pub time: f64,
    pub is_player: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, time: f64, is_player: bool) -> Self {
        Self {
            name: name.into(),
            time,
            is_player,
        }
    }

    /// Build from the host's arrays, where the local player is spelled
    /// [`PLAYER_NAME`].
    pub fn from_host(name: &str, time: f64) -> Self {
        Self::new(name, time, name == PLAYER_NAME)
    }
}

/// Zip names with times, truncating to the shorter of the two.
pub fn pair_participants<S: AsRef<str>>(names: &[S], times: &[f64]) -> Vec<Participant> {
    if names.len() != times.len() {
        log::warn!(
            "statistics: {} names but {} times; extra entries ignored",
            names.len(),
            times.len()
        );
    }
    names
        .iter()
        .zip(times)
        .map(|(name, &time)| Participant::from_host(name.as_ref(), time))
        .collect()
}

/// Both view models of the statistics screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatisticsView {
    pub cloud: Cloud,
    pub histogram: Histogram,
}

impl StatisticsView {
    pub fn build(layout: &StatisticsLayout, participants: &[Participant]) -> Self {
        Self {
            cloud: Cloud::from_layout(&layout.cloud, &layout.message),
            histogram: Histogram::build(layout, participants),
        }
    }

    /// Cloud first, histogram on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        render_cloud(surface, &self.cloud)?;
        render_histogram(surface, &self.histogram)
    }
}

/// Build and draw the whole statistics screen.
pub fn render_statistics_view<S: Surface + ?Sized, N: AsRef<str>>(
    surface: &mut S,
    layout: &StatisticsLayout,
    names: &[N],
    times: &[f64],
) -> Result<StatisticsView> {
    let participants = pair_participants(names, times);
    let view = StatisticsView::build(layout, &participants);
    view.render(surface)?;
    log::debug!(
        "statistics view rendered with {} bars",
        view.histogram.bars.len()
    );
    Ok(view)
}
