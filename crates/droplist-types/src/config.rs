//! Dropdown configuration loaded from TOML.
//!
//! Every field has a default, so an empty document (or a missing section)
//! yields the stock look. Example:
//!
//! ```toml
//! [layout]
//! min_width = 128
//! padding = 5
//!
//! [navigation]
//! id_base = 1100000
//!
//! [sprites]
//! hover = { x = 0, y = 0, w = 16, h = 16 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DropdownError, Result};
use crate::geometry::SpriteRegion;

/// Alphabet used to measure row height. Every row uses this height
/// regardless of its own label so rows stay aligned.
pub const DEFAULT_REFERENCE_TEXT: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// First controller-navigation id handed to a dropdown's top slot.
pub const DEFAULT_NAV_ID_BASE: i32 = 1_100_000;

/// Top-level dropdown configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub layout: LayoutConfig,
    pub navigation: NavigationConfig,
    pub sprites: SpriteConfig,
}

/// Row sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Floor applied to the widest measured label.
    pub min_width: u32,
    /// Padding inside each row, applied on every side.
    pub padding: u16,
    /// Font size hint passed to the backend.
    pub font_size: u16,
    /// String measured to derive the uniform row height.
    pub reference_text: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 128,
            padding: 5,
            font_size: 8,
            reference_text: DEFAULT_REFERENCE_TEXT.to_string(),
        }
    }
}

/// Controller-navigation id allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Id of the top slot; following slots count up from here.
    pub id_base: i32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            id_base: DEFAULT_NAV_ID_BASE,
        }
    }
}

/// Named regions inside the dropdown sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub hover: SpriteRegion,
    pub active: SpriteRegion,
    pub inactive: SpriteRegion,
    pub up_arrow: SpriteRegion,
    pub down_arrow: SpriteRegion,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            hover: SpriteRegion::new(0, 0, 16, 16),
            active: SpriteRegion::new(16, 0, 16, 16),
            inactive: SpriteRegion::new(32, 0, 16, 16),
            up_arrow: SpriteRegion::new(0, 16, 12, 8),
            down_arrow: SpriteRegion::new(12, 16, 12, 8),
        }
    }
}

impl DropdownConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::debug!("Loaded dropdown config from {}", path.display());
        Ok(config)
    }

    /// Reject values the layout math cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.layout.font_size == 0 {
            return Err(DropdownError::Config("layout.font_size must be non-zero".into()));
        }
        if self.layout.reference_text.is_empty() {
            return Err(DropdownError::Config(
                "layout.reference_text must not be empty".into(),
            ));
        }
        let sprites = [
            ("hover", &self.sprites.hover),
            ("active", &self.sprites.active),
            ("inactive", &self.sprites.inactive),
            ("up_arrow", &self.sprites.up_arrow),
            ("down_arrow", &self.sprites.down_arrow),
        ];
        for (name, region) in sprites {
            if region.is_empty() {
                return Err(DropdownError::Config(format!(
                    "sprites.{name} must have a non-zero size"
                )));
            }
        }
        Ok(())
    }
}
