//! Read-only configuration for both views.
//!
//! Defaults mirror the game's shipped look. `standard()` getters hand out a
//! process-wide instance built once; hosts that want a different layout can
//! deserialize their own (feature `serde`).

use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};
use crate::surface::Rgba;

/// Name the host uses for the local player in the `names` array.
pub const PLAYER_NAME: &str = "Вы";

/// Number of similar wizards shown in the setup dialog.
pub const SETUP_WIZARDS_COUNT: usize = 4;

const WIZARD_FIRST_NAMES: &[&str] = &[
    "Иван",
    "Хуан Себастьян",
    "Мария",
    "Кристоф",
    "Виктор",
    "Юлия",
    "Люпита",
    "Вашингтон",
];

const WIZARD_LAST_NAMES: &[&str] = &[
    "да Марья",
    "Верон",
    "Мирабелла",
    "Вальц",
    "Онопко",
    "Топольницкая",
    "Нионго",
    "Ирвинг",
];

const WIZARD_COAT_COLORS: &[&str] = &[
    "rgb(101, 137, 164)",
    "rgb(241, 43, 107)",
    "rgb(146, 100, 161)",
    "rgb(56, 159, 117)",
    "rgb(215, 210, 55)",
    "rgb(0, 0, 0)",
];

const WIZARD_EYES_COLORS: &[&str] = &["black", "red", "blue", "yellow", "green"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// --- Setup view -------------------------------------------------------------

/// Pools the setup view samples wizards from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SetupConfig {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub coat_colors: Vec<String>,
    pub eyes_colors: Vec<String>,
    pub count: usize,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            first_names: owned(WIZARD_FIRST_NAMES),
            last_names: owned(WIZARD_LAST_NAMES),
            coat_colors: owned(WIZARD_COAT_COLORS),
            eyes_colors: owned(WIZARD_EYES_COLORS),
            count: SETUP_WIZARDS_COUNT,
        }
    }
}

impl SetupConfig {
    pub fn standard() -> &'static SetupConfig {
        static CONFIG: OnceLock<SetupConfig> = OnceLock::new();
        CONFIG.get_or_init(SetupConfig::default)
    }
}

// --- Statistics view --------------------------------------------------------

/// The white panel and its drop shadow.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CloudLayout {
    pub position: Point,
    pub size: Size,
    /// Shadow displacement: x is the horizontal offset, y the vertical one.
    pub shadow_offset: Point,
    pub shadow_color: String,
    pub background: String,
}

impl Default for CloudLayout {
    fn default() -> Self {
        Self {
            position: Point::new(100.0, 10.0),
            size: Size::new(420.0, 270.0),
            shadow_offset: Point::new(10.0, 10.0),
            shadow_color: "rgba(0, 0, 0, 0.7)".to_string(),
            background: "rgba(255, 255, 255, 1.0)".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MessageLayout {
    pub origin: Point,
    pub line_offset: f64,
    pub foreground: String,
    pub font: String,
    pub lines: Vec<String>,
}

impl Default for MessageLayout {
    fn default() -> Self {
        Self {
            origin: Point::new(120.0, 40.0),
            line_offset: 20.0,
            foreground: "#000".to_string(),
            font: "16px PT Mono".to_string(),
            lines: owned(&["Ура, вы победили!", "Список результатов:"]),
        }
    }
}

/// Placement of the histogram block. `origin` is the text baseline of the
/// player names; bars stand `line_height` above it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HistogramLayout {
    pub origin: Point,
    pub height: f64,
    pub line_offset: f64,
    pub line_height: f64,
    pub foreground: String,
    pub font: String,
}

impl Default for HistogramLayout {
    fn default() -> Self {
        Self {
            origin: Point::new(120.0, 260.0),
            height: 150.0,
            line_offset: 8.0,
            line_height: 18.0,
            foreground: "#000".to_string(),
            font: "14px PT Mono".to_string(),
        }
    }
}

/// Width, spacing and base color of a bar. The alpha of `color` is only used
/// for the player bar; member bars derive theirs from the time ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BarStyle {
    pub width: f64,
    pub distance: f64,
    pub color: Rgba,
}

impl Default for BarStyle {
    fn default() -> Self {
        BarStyle::MEMBER
    }
}

impl BarStyle {
    pub const PLAYER: BarStyle = BarStyle {
        width: 40.0,
        distance: 25.0,
        color: Rgba::new(255, 0, 0, 1.0),
    };

    pub const MEMBER: BarStyle = BarStyle {
        width: 40.0,
        distance: 25.0,
        color: Rgba::new(0, 0, 155, 1.0),
    };

    /// Horizontal space one bar occupies, margins included.
    pub fn pitch(&self) -> f64 {
        self.width + 2.0 * self.distance
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StatisticsLayout {
    pub cloud: CloudLayout,
    pub message: MessageLayout,
    pub histogram: HistogramLayout,
    pub player_bar: BarStyle,
    pub member_bar: BarStyle,
}

impl Default for StatisticsLayout {
    fn default() -> Self {
        Self {
            cloud: CloudLayout::default(),
            message: MessageLayout::default(),
            histogram: HistogramLayout::default(),
            player_bar: BarStyle::PLAYER,
            member_bar: BarStyle::MEMBER,
        }
    }
}

impl StatisticsLayout {
    pub fn standard() -> &'static StatisticsLayout {
        static LAYOUT: OnceLock<StatisticsLayout> = OnceLock::new();
        LAYOUT.get_or_init(StatisticsLayout::default)
    }

    /// Parse a (possibly partial) layout; missing fields at any depth keep
    /// their defaults, so `{"player_bar":{"width":30}}` stays red.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::error::Result<StatisticsLayout> {
        use crate::error::ViewError;

        let patch: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ViewError::Layout(e.to_string()))?;
        let mut merged = serde_json::to_value(StatisticsLayout::default())
            .map_err(|e| ViewError::Layout(e.to_string()))?;
        merge_json(&mut merged, patch);
        serde_json::from_value(merged).map_err(|e| ViewError::Layout(e.to_string()))
    }
}

// Objects merge key by key; anything else replaces the base value.
#[cfg(feature = "serde_json")]
fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    use serde_json::Value;

    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pools_are_populated() {
        let cfg = SetupConfig::standard();
        assert_eq!(cfg.first_names.len(), 8);
        assert_eq!(cfg.last_names.len(), 8);
        assert_eq!(cfg.coat_colors.len(), 6);
        assert_eq!(cfg.eyes_colors.len(), 5);
        assert_eq!(cfg.count, SETUP_WIZARDS_COUNT);
    }

    #[test]
    fn bar_pitch_includes_both_margins() {
        assert_eq!(BarStyle::PLAYER.pitch(), 90.0);
        assert_eq!(BarStyle::MEMBER.pitch(), 90.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_layout_json_keeps_defaults() {
        let layout = StatisticsLayout::from_json(r#"{"histogram":{"height":100.0}}"#).unwrap();
        assert_eq!(layout.histogram.height, 100.0);
        assert_eq!(layout.histogram.line_height, 18.0);
        assert_eq!(layout.cloud, CloudLayout::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_bar_style_keeps_its_own_defaults() {
        let layout = StatisticsLayout::from_json(
            r#"{"member_bar":{"distance":10.0},"player_bar":{"width":30.0}}"#,
        )
        .unwrap();
        assert_eq!(layout.member_bar.distance, 10.0);
        assert_eq!(layout.member_bar.width, 40.0);
        assert_eq!(layout.member_bar.color, Rgba::new(0, 0, 155, 1.0));
        assert_eq!(layout.player_bar.width, 30.0);
        assert_eq!(layout.player_bar.color, Rgba::new(255, 0, 0, 1.0));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_point_keeps_other_axis() {
        let layout = StatisticsLayout::from_json(r#"{"histogram":{"origin":{"x":0.0}}}"#).unwrap();
        assert_eq!(layout.histogram.origin, Point::new(0.0, 260.0));
    }

    #[test]
    fn bar_style_defaults_to_member() {
        assert_eq!(BarStyle::default(), BarStyle::MEMBER);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_layout_json_is_an_error() {
        assert!(StatisticsLayout::from_json("{not json").is_err());
    }
}
