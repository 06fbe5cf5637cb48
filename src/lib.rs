//! Emoji Catalog: a Zellij plugin for browsing a remote emoji dataset.
//!
//! The plugin fetches a JSON catalog over HTTP and presents it as a list of
//! cards. Users can:
//! - Reload the catalog on demand
//! - Sort by name in either direction
//! - Search names, categories and descriptions
//! - Narrow the list to a single category
//!
//! On start a short decorative sequence shows a sample of the catalog on a
//! ring before the full list is loaded.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls only
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, catalog state, loading sequence  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ Source        │   │ Domain        │
//! │ - Components  │   │ (source/)     │   │ (domain/)     │
//! │ - Theming     │   │ - Envelope    │   │ - EmojiRecord │
//! │ - Frame       │   │ - Fetch tags  │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/), paths              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/emoji-catalog.wasm" {
//!         data_url "https://example.com/emoji.json"
//!         spinner "true"
//!         spinner_dwell_secs "3"
//!         spinner_fade_secs "1"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use emoji_catalog::{handle_event, initialize, Action, Config, Event};
//! use emoji_catalog::source::FetchPurpose;
//!
//! let config = Config { spinner_enabled: false, ..Config::default() };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! assert_eq!(actions, vec![Action::Fetch { purpose: FetchPurpose::Catalog }]);
//! # Ok::<(), emoji_catalog::CatalogError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SortOrder};
pub use domain::{CatalogError, EmojiRecord, Result};
pub use ui::Theme;

use app::{LoadingSequence, SpinnerTiming};
use std::collections::BTreeMap;

/// Catalog fetched when no `data_url` is configured.
pub const DEFAULT_DATA_URL: &str =
    "https://thekingofhearts777.github.io/UWPLATT-Computer3870-Assignment02-json-data/emoji.json";

/// Plugin configuration parsed from Zellij's KDL options.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog endpoint. Default: [`DEFAULT_DATA_URL`]
    pub data_url: String,

    /// Dwell and fade durations of the loading sequence.
    pub timing: SpinnerTiming,

    /// Run the decorative loading sequence on start. Default: `true`
    pub spinner_enabled: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` refers to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            timing: SpinnerTiming::default(),
            spinner_enabled: true,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored and malformed values fall back to their
    /// defaults with a warning.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use emoji_catalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("spinner_dwell_secs".to_string(), "0.5".to_string());
    /// map.insert("spinner".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!((config.timing.dwell_secs - 0.5).abs() < f64::EPSILON);
    /// assert!(!config.spinner_enabled);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };
        let or_default = |key: &str, parsed: Result<f64>, fallback: f64| {
            parsed.unwrap_or_else(|e| {
                if config.contains_key(key) {
                    tracing::warn!(key, error = %e, fallback, "invalid config value");
                }
                fallback
            })
        };

        let timing = SpinnerTiming {
            dwell_secs: or_default(
                "spinner_dwell_secs",
                parse_secs("spinner_dwell_secs", config.get("spinner_dwell_secs")),
                defaults.timing.dwell_secs,
            ),
            fade_secs: or_default(
                "spinner_fade_secs",
                parse_secs("spinner_fade_secs", config.get("spinner_fade_secs")),
                defaults.timing.fade_secs,
            ),
        };

        let spinner_enabled = config
            .get("spinner")
            .map_or(defaults.spinner_enabled, |v| {
                !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "off" | "no" | "0")
            });

        Self {
            data_url: text("data_url").unwrap_or(defaults.data_url),
            timing,
            spinner_enabled,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Parses a strictly positive, finite number of seconds.
fn parse_secs(key: &str, value: Option<&String>) -> Result<f64> {
    let value = value.ok_or_else(|| CatalogError::Config(format!("{key} is not set")))?;
    match value.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Ok(secs),
        Ok(_) => Err(CatalogError::Config(format!("{key} must be positive, got {value}"))),
        Err(e) => Err(CatalogError::Config(format!("{key}: {e}"))),
    }
}

/// Builds the initial application state from configuration.
///
/// Theme precedence is `theme_file`, then `theme`, then the default theme;
/// a theme that fails to load is logged and replaced by the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(data_url = %config.data_url, spinner = config.spinner_enabled, "initializing emoji catalog");

    let theme = match (&config.theme_file, &config.theme_name) {
        (Some(file), _) => {
            let path = infrastructure::expand_tilde(file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        }
        (None, Some(name)) => Theme::from_name(name).unwrap_or_else(|e| {
            tracing::warn!(theme_name = %name, error = %e, "failed to load theme, using default");
            Theme::default()
        }),
        (None, None) => Theme::default(),
    };

    let loading = if config.spinner_enabled {
        LoadingSequence::new(config.timing)
    } else {
        LoadingSequence::finished(config.timing)
    };

    AppState::new(theme, loading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadingPhase;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_zellij(&map(&[
            ("data_url", "http://localhost/emoji.json"),
            ("spinner_dwell_secs", "2"),
            ("spinner_fade_secs", "0.25"),
            ("spinner", "true"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.data_url, "http://localhost/emoji.json");
        assert_eq!(config.timing, SpinnerTiming { dwell_secs: 2.0, fade_secs: 0.25 });
        assert!(config.spinner_enabled);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn bad_durations_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("spinner_dwell_secs", "-1"),
            ("spinner_fade_secs", "soon"),
        ]));
        assert_eq!(config.timing, SpinnerTiming::default());
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_zellij(&map(&[("data_url", "  "), ("theme", "")]));
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn parse_secs_reports_config_errors() {
        assert!(matches!(
            parse_secs("spinner_fade_secs", Some(&"0".to_string())),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(parse_secs("x", None), Err(CatalogError::Config(_))));
    }

    #[test]
    fn initialize_honours_spinner_switch() {
        let on = initialize(&Config::default());
        assert_eq!(on.loading.phase(), &LoadingPhase::Idle);

        let off = initialize(&Config {
            spinner_enabled: false,
            ..Config::default()
        });
        assert_eq!(off.loading.phase(), &LoadingPhase::Done);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let state = initialize(&Config {
            theme_name: Some("nope".to_string()),
            ..Config::default()
        });
        assert_eq!(state.theme, Theme::default());
    }
}
