//! Demo scenarios: a dropdown definition plus the input to replay on it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use droplist_types::config::DropdownConfig;
use droplist_types::input::InputEvent;
use droplist_ui::Theme;

/// Scenario shipped with the binary, used when no path is given.
pub const BUILTIN: &str = include_str!("../scenarios/sizes.toml");

/// A replayable dropdown session (`*.toml`).
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Option values; each value is also its label.
    pub values: Vec<String>,
    /// Initially selected value.
    #[serde(default)]
    pub selected: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    /// Screen size as `[width, height]`.
    #[serde(default = "default_viewport")]
    pub viewport: (u32, u32),
    /// Host-allocated navigation id base, overriding the config.
    #[serde(default)]
    pub nav_base: Option<i32>,
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default)]
    pub config: DropdownConfig,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

fn default_viewport() -> (u32, u32) {
    (480, 272)
}

/// Built-in color theme selected by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        match self {
            Self::Dark => Theme::dark(),
            Self::Light => Theme::light(),
        }
    }
}

impl Scenario {
    pub fn from_toml(source: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(source).context("invalid scenario")?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_toml(&source)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droplist_types::input::Button;

    #[test]
    fn builtin_parses() {
        let s = Scenario::builtin().unwrap();
        assert_eq!(s.values.len(), 6);
        assert_eq!(s.selected, "Medium");
        assert_eq!(s.viewport, (480, 272));
        assert_eq!(s.config.layout.padding, 4);
        assert_eq!(s.events.first(), Some(&InputEvent::CursorMove { x: 20, y: 210 }));
        assert_eq!(s.events.last(), Some(&InputEvent::Quit));
        assert!(s.events.contains(&InputEvent::ButtonPress { button: Button::Up }));
    }

    #[test]
    fn minimal_scenario_uses_defaults() {
        let s = Scenario::from_toml("values = [\"a\"]").unwrap();
        assert_eq!(s.viewport, (480, 272));
        assert_eq!((s.x, s.y), (0, 0));
        assert!(s.events.is_empty());
        assert!(s.nav_base.is_none());
        assert_eq!(s.theme, ThemeName::Dark);
        assert_eq!(s.config, DropdownConfig::default());
    }

    #[test]
    fn light_theme_selectable() {
        let s = Scenario::from_toml("values = [\"a\"]\ntheme = \"light\"\n").unwrap();
        assert_eq!(s.theme, ThemeName::Light);
        assert_eq!(s.theme.theme(), Theme::light());
    }

    #[test]
    fn unknown_theme_rejected() {
        assert!(Scenario::from_toml("values = [\"a\"]\ntheme = \"sepia\"\n").is_err());
    }

    #[test]
    fn invalid_config_rejected() {
        let src = "values = [\"a\"]\n[config.layout]\nfont_size = 0\n";
        assert!(Scenario::from_toml(src).is_err());
    }

    #[test]
    fn missing_values_rejected() {
        assert!(Scenario::from_toml("selected = \"a\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/scenario.toml"));
    }
}
