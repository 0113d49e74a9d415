//! Backend trait definitions.
//!
//! The widget never talks to a platform API directly. Hosts implement
//! [`TextMetrics`] for layout and [`RenderBackend`] for drawing; the widget
//! dispatches everything through these trait boundaries.
//!
//! `RenderBackend` has a small set of required methods and a few provided
//! texture helpers with default implementations that approximate using the
//! required ones, so simple backends work without overriding them.

use crate::error::Result;
use crate::geometry::{Rect, SpriteRegion};

/// Glyph width of the built-in 8x8 bitmap font at its native size.
pub const BITMAP_GLYPH_WIDTH: u32 = 8;

/// Glyph height of the built-in 8x8 bitmap font at its native size.
pub const BITMAP_GLYPH_HEIGHT: u32 = 8;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Multiply the alpha channel by `opacity`, clamped to `0.0..=1.0`.
    pub fn scale_alpha(self, opacity: f32) -> Self {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self.with_alpha((self.a as f32 * opacity).round() as u8)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Opaque handle to a loaded texture in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Text measurement capability.
///
/// Split from [`RenderBackend`] so layout can run without a drawing
/// surface (e.g. at construction time, before the first frame).
pub trait TextMetrics {
    /// Measure the width of a text string at the given font size, in pixels.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Measure the line height of text at the given font size.
    ///
    /// Defaults to the bitmap glyph height scaled by whole multiples of the
    /// native size, never smaller than one glyph.
    fn measure_text_height(&self, font_size: u16) -> u32 {
        (font_size as u32 / BITMAP_GLYPH_HEIGHT).max(1) * BITMAP_GLYPH_HEIGHT
    }

    /// Measure both width and height of a text string.
    fn measure_text_extents(&self, text: &str, font_size: u16) -> (u32, u32) {
        (
            self.measure_text(text, font_size),
            self.measure_text_height(font_size),
        )
    }
}

/// Rendering backend trait.
///
/// # Required
///
/// `fill_rect`, `draw_text`, `blit`, and `viewport_size`.
///
/// # Provided
///
/// `blit_sub` and `blit_sub_tinted` default to a plain `blit` of the
/// destination rectangle, ignoring the source region and tint. Backends with
/// atlas support should override them. `push_clip_rect` / `pop_clip_rect`
/// default to no-ops, so drawing is unclipped unless the backend supports it.
pub trait RenderBackend: TextMetrics {
    /// Draw a filled rectangle (used when no texture is assigned).
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draw text at the given position. `font_size` is a hint in pixels;
    /// backends may approximate.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Blit a whole texture into the destination rectangle.
    fn blit(&mut self, tex: TextureId, dst: Rect) -> Result<()>;

    /// Current viewport size as `(width, height)` in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Blit a sub-rectangle from a texture (sprite sheet / atlas support).
    fn blit_sub(&mut self, tex: TextureId, src: SpriteRegion, dst: Rect) -> Result<()> {
        let _ = src;
        self.blit(tex, dst)
    }

    /// Blit a texture sub-rectangle with a multiplicative color tint.
    fn blit_sub_tinted(
        &mut self,
        tex: TextureId,
        src: SpriteRegion,
        dst: Rect,
        tint: Color,
    ) -> Result<()> {
        let _ = tint;
        self.blit_sub(tex, src, dst)
    }

    /// Push a clip rectangle. Calls nest and must be balanced with
    /// [`pop_clip_rect`](Self::pop_clip_rect).
    fn push_clip_rect(&mut self, rect: Rect) -> Result<()> {
        let _ = rect;
        Ok(())
    }

    /// Pop the most recently pushed clip rectangle.
    fn pop_clip_rect(&mut self) -> Result<()> {
        Ok(())
    }
}
