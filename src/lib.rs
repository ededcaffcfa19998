//! Wizard views crate.
//!
//! Two leaf views of the wizard game, exported to the host page via
//! `wasm-bindgen`:
//! - `showSetup()` fills the character setup dialog with random wizards;
//! - `renderStatistics(ctx, names, times)` draws the end-of-level results
//!   panel on a 2D canvas.
//!
//! View models are plain Rust and can be built and inspected without a
//! browser.

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

pub mod config;
pub mod error;
pub mod geometry;
pub mod setup;
pub mod statistics;
pub mod surface;

pub use config::{PLAYER_NAME, SETUP_WIZARDS_COUNT, SetupConfig, StatisticsLayout};
pub use error::ViewError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second init (e.g. module instantiated twice) keeps the first logger.
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialised");
    }
}

// -----------------------------------------------------------------------------
// Setup view
// -----------------------------------------------------------------------------

#[wasm_bindgen(js_name = showSetup)]
pub fn show_setup() -> Result<(), JsValue> {
    let config = SetupConfig::standard();
    setup::show_setup_view(config, config.count)?;
    Ok(())
}

/// Negative counts show the dialog with no wizards.
#[wasm_bindgen(js_name = showSetupWithCount)]
pub fn show_setup_with_count(count: i32) -> Result<(), JsValue> {
    setup::show_setup_view(SetupConfig::standard(), setup::wizard_count(count))?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Statistics view
// -----------------------------------------------------------------------------

/// Called by the game each time the player finishes a level. `names` and
/// `times` are paired by index; the player's own entry is named `"Вы"`.
#[wasm_bindgen(js_name = renderStatistics)]
pub fn render_statistics(
    ctx: &CanvasRenderingContext2d,
    names: Vec<String>,
    times: Vec<f64>,
) -> Result<(), JsValue> {
    let mut surface = ctx.clone();
    statistics::render_statistics_view(
        &mut surface,
        StatisticsLayout::standard(),
        names.as_slice(),
        times.as_slice(),
    )?;
    Ok(())
}

/// Same as `renderStatistics` with a JSON layout override; fields left out
/// keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen(js_name = renderStatisticsWithLayout)]
pub fn render_statistics_with_layout(
    ctx: &CanvasRenderingContext2d,
    names: Vec<String>,
    times: Vec<f64>,
    layout_json: &str,
) -> Result<(), JsValue> {
    let layout = StatisticsLayout::from_json(layout_json)?;
    let mut surface = ctx.clone();
    statistics::render_statistics_view(
        &mut surface,
        &layout,
        names.as_slice(),
        times.as_slice(),
    )?;
    Ok(())
}
