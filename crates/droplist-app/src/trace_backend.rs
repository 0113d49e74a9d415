//! Headless backend that counts and logs draw calls.
//!
//! Measures text with the 8x8 bitmap metrics so layouts match what a
//! bitmap-font backend would produce.

use droplist_types::backend::{
    BITMAP_GLYPH_HEIGHT, BITMAP_GLYPH_WIDTH, Color, RenderBackend, TextMetrics, TextureId,
};
use droplist_types::error::{DropdownError, Result};
use droplist_types::geometry::{Rect, SpriteRegion};

/// Per-frame draw statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub fills: usize,
    pub texts: usize,
    pub blits: usize,
}

pub struct TraceBackend {
    viewport: (u32, u32),
    frame: FrameStats,
    /// Text drawn this frame, in call order.
    texts: Vec<String>,
    clips: Vec<Rect>,
}

impl TraceBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            frame: FrameStats::default(),
            texts: Vec::new(),
            clips: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Return this frame's statistics and texts, and start a new frame.
    pub fn end_frame(&mut self) -> (FrameStats, Vec<String>) {
        if !self.clips.is_empty() {
            log::warn!("{} clip rect(s) still pushed at end of frame", self.clips.len());
            self.clips.clear();
        }
        let stats = std::mem::take(&mut self.frame);
        (stats, std::mem::take(&mut self.texts))
    }

    fn warn_if_off_screen(&self, rect: Rect) {
        let (w, h) = self.viewport;
        if rect.x >= w as i32 || rect.y >= h as i32 || rect.right() < 0 || rect.bottom() < 0 {
            log::warn!("draw outside viewport: {rect:?}");
        }
    }
}

impl TextMetrics for TraceBackend {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        let scale = (font_size as u32 / BITMAP_GLYPH_HEIGHT).max(1);
        text.chars().count() as u32 * BITMAP_GLYPH_WIDTH * scale
    }
}

impl RenderBackend for TraceBackend {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.warn_if_off_screen(rect);
        log::trace!("fill {rect:?} {color:?}");
        self.frame.fills += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        _color: Color,
    ) -> Result<()> {
        let (w, h) = self.measure_text_extents(text, font_size);
        self.warn_if_off_screen(Rect::new(x, y, w, h));
        log::trace!("text {text:?} at ({x}, {y})");
        self.frame.texts += 1;
        self.texts.push(text.to_string());
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, dst: Rect) -> Result<()> {
        if tex.0 == 0 {
            return Err(DropdownError::Backend("texture 0 is not loaded".into()));
        }
        self.warn_if_off_screen(dst);
        self.frame.blits += 1;
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
        log::trace!("blit {src:?} -> {dst:?} tint {tint:?}");
        self.blit(tex, dst)
    }

    fn push_clip_rect(&mut self, rect: Rect) -> Result<()> {
        log::trace!("clip {rect:?}");
        self.clips.push(rect);
        Ok(())
    }

    fn pop_clip_rect(&mut self) -> Result<()> {
        self.clips
            .pop()
            .map(|_| ())
            .ok_or_else(|| DropdownError::Backend("clip stack underflow".into()))
    }
}
