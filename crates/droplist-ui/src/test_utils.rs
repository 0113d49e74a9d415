//! Shared test utilities for droplist-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion and
//! measures text with fixed 8x8 bitmap metrics.

use droplist_types::backend::{
    BITMAP_GLYPH_HEIGHT, BITMAP_GLYPH_WIDTH, Color, RenderBackend, TextMetrics, TextureId,
};
use droplist_types::error::Result;
use droplist_types::geometry::{Rect, SpriteRegion};

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    Blit {
        tex: TextureId,
        dst: Rect,
    },
    BlitSub {
        tex: TextureId,
        src: SpriteRegion,
        dst: Rect,
        tint: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub viewport: (u32, u32),
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_viewport(480, 272)
    }

    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            calls: Vec::new(),
            viewport: (width, height),
        }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `DrawText` calls.
    pub fn draw_text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawText { .. }))
            .count()
    }

    /// Texts drawn, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Source regions of every sprite blit, in call order.
    pub fn sprite_sources(&self) -> Vec<SpriteRegion> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::BlitSub { src, .. } => Some(*src),
                _ => None,
            })
            .collect()
    }

    /// Fill colors, in call order.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl TextMetrics for MockBackend {
    fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
        text.chars().count() as u32 * BITMAP_GLYPH_WIDTH
    }

    fn measure_text_height(&self, _font_size: u16) -> u32 {
        BITMAP_GLYPH_HEIGHT
    }
}

impl RenderBackend for MockBackend {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { rect, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, dst: Rect) -> Result<()> {
        self.calls.push(DrawCall::Blit { tex, dst });
        Ok(())
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn blit_sub_tinted(
        &mut self,
        tex: TextureId,
        src: SpriteRegion,
        dst: Rect,
        tint: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::BlitSub {
            tex,
            src,
            dst,
            tint,
        });
        Ok(())
    }

    fn push_clip_rect(&mut self, rect: Rect) -> Result<()> {
        self.calls.push(DrawCall::PushClip { rect });
        Ok(())
    }

    fn pop_clip_rect(&mut self) -> Result<()> {
        self.calls.push(DrawCall::PopClip);
        Ok(())
    }
}
