//! Sprite sheet binding for the dropdown.

use droplist_types::backend::TextureId;
use droplist_types::config::SpriteConfig;
use droplist_types::geometry::SpriteRegion;

/// Sprite sheet texture plus the named regions the dropdown draws from.
///
/// Without a texture the dropdown falls back to theme fill colors for rows
/// and text glyphs for the scroll indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSkin {
    pub texture: Option<TextureId>,
    pub hover: SpriteRegion,
    pub active: SpriteRegion,
    pub inactive: SpriteRegion,
    pub up_arrow: SpriteRegion,
    pub down_arrow: SpriteRegion,
}

impl DropdownSkin {
    /// Bind configured regions to a loaded texture.
    pub fn from_config(sprites: &SpriteConfig, texture: Option<TextureId>) -> Self {
        Self {
            texture,
            hover: sprites.hover,
            active: sprites.active,
            inactive: sprites.inactive,
            up_arrow: sprites.up_arrow,
            down_arrow: sprites.down_arrow,
        }
    }
}

impl Default for DropdownSkin {
    fn default() -> Self {
        Self::from_config(&SpriteConfig::default(), None)
    }
}
