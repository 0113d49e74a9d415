//! Theme colors for the dropdown.

use droplist_types::backend::Color;

/// Visual theme used by the dropdown.
///
/// Row colors are only used when no sprite sheet texture is bound; with a
/// texture the sprites are drawn tinted by `sprite_tint`.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Label text color.
    pub text_primary: Color,
    /// Scroll indicator glyph color.
    pub text_secondary: Color,
    /// Multiplicative tint applied to every sprite blit.
    pub sprite_tint: Color,
    /// Row fill under the pointer.
    pub row_hover: Color,
    /// Row fill for the selected option.
    pub row_active: Color,
    /// Row fill for every other option.
    pub row_inactive: Color,
}

impl Theme {
    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            text_primary: Color::rgb(230, 230, 240),
            text_secondary: Color::rgb(160, 160, 180),
            sprite_tint: Color::WHITE,
            row_hover: Color::rgb(65, 65, 90),
            row_active: Color::rgb(80, 160, 255),
            row_inactive: Color::rgb(30, 30, 40),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            text_primary: Color::rgb(20, 20, 30),
            text_secondary: Color::rgb(100, 100, 120),
            sprite_tint: Color::WHITE,
            row_hover: Color::rgb(220, 225, 235),
            row_active: Color::rgb(50, 120, 220),
            row_inactive: Color::rgb(255, 255, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(c: Color) -> u32 {
        c.r as u32 + c.g as u32 + c.b as u32
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn dark_text_brighter_than_rows() {
        let t = Theme::dark();
        assert!(luminance(t.text_primary) > luminance(t.row_inactive));
    }

    #[test]
    fn light_text_darker_than_rows() {
        let t = Theme::light();
        assert!(luminance(t.text_primary) < luminance(t.row_inactive));
    }

    #[test]
    fn row_states_distinct() {
        for t in [Theme::dark(), Theme::light()] {
            assert_ne!(t.row_hover, t.row_active);
            assert_ne!(t.row_active, t.row_inactive);
            assert_ne!(t.row_hover, t.row_inactive);
        }
    }
}
