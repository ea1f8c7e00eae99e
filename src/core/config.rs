//! Motion configuration and server configuration from environment variables.
//!
//! `MotionConfig` is shared by the server and the browser: the server renders
//! it into the page as JSON and the hydrated client reads it back. `Config`
//! only exists on the server; load it with `Config::from_env()` after calling
//! `dotenvy::dotenv()`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::reveal::{TriggerParseError, TriggerPoint};

/// Errors produced while loading or validating configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid {expected}: {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{key}: {source}")]
    InvalidTrigger {
        key: &'static str,
        #[source]
        source: TriggerParseError,
    },
    #[error("{field} {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
    #[error("motion config JSON is malformed: {0}")]
    Json(String),
}

/// Typewriter timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

impl TypewriterTiming {
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

/// Custom cursor tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorTuning {
    /// Follower gain per frame, in (0, 1]
    pub gain: f64,
    /// Inactivity before the idle particles appear
    pub idle_after_ms: u64,
    /// Inactivity thresholds for each hint tier, ascending
    pub hint_after_ms: Vec<u64>,
}

impl Default for CursorTuning {
    fn default() -> Self {
        Self {
            gain: 0.15,
            idle_after_ms: 2_000,
            hint_after_ms: vec![20_000, 40_000, 60_000],
        }
    }
}

/// Loader timing in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderTiming {
    pub tick_ms: u64,
    pub grace_ms: u64,
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            grace_ms: 500,
        }
    }
}

/// Horizontal carousel tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselTuning {
    /// Viewport widths of vertical scroll consumed per card step
    pub scroll_multiplier: f64,
    /// Gap between cards in pixels
    pub gap: f64,
    pub snap: bool,
    /// Scroll pause before snapping
    pub snap_delay_ms: u64,
    /// Below this viewport width the cards stack vertically
    pub min_viewport_width: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            scroll_multiplier: 3.0,
            gap: 0.0,
            snap: true,
            snap_delay_ms: 150,
            min_viewport_width: 768.0,
        }
    }
}

/// Everything the animation layer can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// When false the page renders static content with no animation
    pub enabled: bool,
    pub typewriter: TypewriterTiming,
    pub cursor: CursorTuning,
    pub loader: LoaderTiming,
    pub carousel: CarouselTuning,
    /// Default window for section entrance reveals
    pub reveal_start: TriggerPoint,
    pub reveal_end: TriggerPoint,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            typewriter: TypewriterTiming::default(),
            cursor: CursorTuning::default(),
            loader: LoaderTiming::default(),
            carousel: CarouselTuning::default(),
            reveal_start: TriggerPoint::TOP_80,
            reveal_end: TriggerPoint::TOP_50,
        }
    }
}

/// Element id of the JSON script tag carrying the motion config
pub const MOTION_CONFIG_ELEMENT_ID: &str = "motion-config";

impl MotionConfig {
    /// Check invariants the animation code relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.typewriter;
        if t.type_ms == 0 || t.delete_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "typewriter",
                reason: "delays must be positive",
            });
        }
        if !(self.cursor.gain > 0.0 && self.cursor.gain <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "cursor.gain",
                reason: "must be in (0, 1]",
            });
        }
        let mut previous = self.cursor.idle_after_ms;
        for &threshold in &self.cursor.hint_after_ms {
            if threshold <= previous {
                return Err(ConfigError::OutOfRange {
                    field: "cursor.hint_after_ms",
                    reason: "must be ascending and after the idle threshold",
                });
            }
            previous = threshold;
        }
        if self.loader.tick_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "loader.tick_ms",
                reason: "must be positive",
            });
        }
        if self.carousel.scroll_multiplier <= 0.0 || !self.carousel.scroll_multiplier.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "carousel.scroll_multiplier",
                reason: "must be a positive number",
            });
        }
        Ok(())
    }

    /// Whether the custom cursor and its input listeners should be installed
    pub fn wants_custom_cursor(&self, fine_pointer: bool) -> bool {
        self.enabled && fine_pointer
    }

    pub fn to_json(&self) -> String {
        // Serializing plain data into a String cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Motion settings rendered into the page for the client
    pub motion: MotionConfig,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut motion = MotionConfig::default();

        if let Some(value) = lookup("MOTION_ENABLED") {
            motion.enabled = parse_bool("MOTION_ENABLED", &value)?;
        }
        if let Some(value) = lookup("TYPEWRITER_HOLD_MS") {
            motion.typewriter.hold_ms = parse_number("TYPEWRITER_HOLD_MS", &value)?;
        }
        if let Some(value) = lookup("LOADER_TICK_MS") {
            motion.loader.tick_ms = parse_number("LOADER_TICK_MS", &value)?;
        }
        if let Some(value) = lookup("CURSOR_GAIN") {
            motion.cursor.gain = parse_number("CURSOR_GAIN", &value)?;
        }
        if let Some(value) = lookup("CAROUSEL_SCROLL_MULTIPLIER") {
            motion.carousel.scroll_multiplier =
                parse_number("CAROUSEL_SCROLL_MULTIPLIER", &value)?;
        }
        if let Some(value) = lookup("CAROUSEL_SNAP") {
            motion.carousel.snap = parse_bool("CAROUSEL_SNAP", &value)?;
        }
        if let Some(value) = lookup("REVEAL_START") {
            motion.reveal_start = parse_trigger("REVEAL_START", &value)?;
        }
        if let Some(value) = lookup("REVEAL_END") {
            motion.reveal_end = parse_trigger("REVEAL_END", &value)?;
        }

        motion.validate()?;
        Ok(Self { motion })
    }

    /// Check if animation is switched on
    pub fn motion_enabled(&self) -> bool {
        self.motion.enabled
    }
}

#[cfg(feature = "ssr")]
fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            expected: "boolean",
            value: value.to_string(),
        }),
    }
}

#[cfg(feature = "ssr")]
fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        expected: "number",
        value: value.to_string(),
    })
}

#[cfg(feature = "ssr")]
fn parse_trigger(key: &'static str, value: &str) -> Result<TriggerPoint, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidTrigger { key, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_timings() {
        let config = MotionConfig::default();
        assert!(config.enabled);
        assert_eq!(config.typewriter.type_ms, 100);
        assert_eq!(config.typewriter.delete_ms, 50);
        assert_eq!(config.typewriter.hold_ms, 2000);
        assert_eq!(config.cursor.hint_after_ms, vec![20_000, 40_000, 60_000]);
        assert_eq!(config.loader.tick_ms, 30);
        assert_eq!(config.carousel.scroll_multiplier, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_keeps_trigger_syntax() {
        let config = MotionConfig::default();
        let json = config.to_json();
        assert!(json.contains("\"reveal_start\":\"top 80%\""));
        assert_eq!(MotionConfig::from_json(&json), Ok(config));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MotionConfig::from_json(r#"{"enabled":false}"#).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.loader, LoaderTiming::default());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            MotionConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_gain() {
        let mut config = MotionConfig::default();
        config.cursor.gain = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "cursor.gain", .. })
        ));
        config.cursor.gain = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unordered_hints() {
        let mut config = MotionConfig::default();
        config.cursor.hint_after_ms = vec![20_000, 10_000];
        assert!(config.validate().is_err());

        config.cursor.hint_after_ms = vec![1_000];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_loader_tick() {
        let mut config = MotionConfig::default();
        config.loader.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_cursor_needs_motion_and_fine_pointer() {
        let mut config = MotionConfig::default();
        assert!(config.wants_custom_cursor(true));
        assert!(!config.wants_custom_cursor(false));

        config.enabled = false;
        assert!(!config.wants_custom_cursor(true));
    }

    #[cfg(feature = "ssr")]
    mod env {
        use super::super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn test_empty_environment_gives_defaults() {
            let config = Config::from_lookup(lookup(&[])).unwrap();
            assert_eq!(config.motion, MotionConfig::default());
            assert!(config.motion_enabled());
        }

        #[test]
        fn test_overrides_are_applied() {
            let config = Config::from_lookup(lookup(&[
                ("MOTION_ENABLED", "off"),
                ("TYPEWRITER_HOLD_MS", "1500"),
                ("CAROUSEL_SCROLL_MULTIPLIER", "2.5"),
                ("CAROUSEL_SNAP", "false"),
                ("REVEAL_START", "top 90%"),
            ]))
            .unwrap();

            assert!(!config.motion_enabled());
            assert_eq!(config.motion.typewriter.hold_ms, 1500);
            assert_eq!(config.motion.carousel.scroll_multiplier, 2.5);
            assert!(!config.motion.carousel.snap);
            assert_eq!(config.motion.reveal_start.to_string(), "top 90%");
        }

        #[test]
        fn test_invalid_number_is_reported_with_key() {
            let err = Config::from_lookup(lookup(&[("LOADER_TICK_MS", "fast")])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    key: "LOADER_TICK_MS",
                    expected: "number",
                    value: "fast".to_string(),
                }
            );
        }

        #[test]
        fn test_invalid_trigger_is_reported() {
            let err = Config::from_lookup(lookup(&[("REVEAL_END", "middle 50%")])).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidTrigger { key: "REVEAL_END", .. }
            ));
        }

        #[test]
        fn test_out_of_range_override_fails_validation() {
            let err = Config::from_lookup(lookup(&[("CURSOR_GAIN", "2")])).unwrap_err();
            assert!(matches!(err, ConfigError::OutOfRange { .. }));
        }
    }
}
