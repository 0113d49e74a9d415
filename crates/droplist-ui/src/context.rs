//! Theme-aware drawing context.
//!
//! The dropdown renders through `DrawContext`, which wraps a
//! `&mut dyn RenderBackend`, the active theme, and the pointer position the
//! host sampled for this frame.

use droplist_types::backend::{Color, RenderBackend, TextureId};
use droplist_types::error::Result;
use droplist_types::geometry::{Rect, SpriteRegion};

use crate::theme::Theme;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn RenderBackend,
    pub theme: &'a Theme,
    pub pointer: Option<(i32, i32)>,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend, theme: &'a Theme) -> Self {
        Self {
            backend,
            theme,
            pointer: None,
        }
    }

    /// Attach the pointer position for hover highlighting.
    pub fn with_pointer(mut self, x: i32, y: i32) -> Self {
        self.pointer = Some((x, y));
        self
    }

    /// Whether the pointer is inside `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|(x, y)| rect.contains(x, y))
    }

    /// Draw a label with a specific style.
    pub fn label_styled(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.backend.draw_text(text, x, y, font_size, color)
    }

    /// Draw a sprite-sheet region into `dst`, tinted and faded by `opacity`.
    pub fn sprite(
        &mut self,
        tex: TextureId,
        src: SpriteRegion,
        dst: Rect,
        opacity: f32,
    ) -> Result<()> {
        let tint = self.theme.sprite_tint.scale_alpha(opacity);
        self.backend.blit_sub_tinted(tex, src, dst, tint)
    }

    /// Fill `rect` with `color` faded by `opacity`.
    pub fn fill(&mut self, rect: Rect, color: Color, opacity: f32) -> Result<()> {
        self.backend.fill_rect(rect, color.scale_alpha(opacity))
    }

    /// Measure text width and line height at the given font size.
    pub fn measure_text_extents(&self, text: &str, font_size: u16) -> (u32, u32) {
        self.backend.measure_text_extents(text, font_size)
    }
}
