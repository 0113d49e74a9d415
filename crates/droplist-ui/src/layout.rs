//! Layout helpers: padding and centering.

use droplist_types::geometry::Rect;

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Top padding in pixels.
    pub top: u16,
    /// Right padding in pixels.
    pub right: u16,
    /// Bottom padding in pixels.
    pub bottom: u16,
    /// Left padding in pixels.
    pub left: u16,
}

impl Padding {
    /// Create uniform padding on all sides.
    pub const fn uniform(p: u16) -> Self {
        Self {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }

    /// Compute the inner rectangle after applying padding.
    pub fn inner_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left as i32,
            rect.y + self.top as i32,
            rect.w.saturating_sub(self.horizontal()),
            rect.h.saturating_sub(self.vertical()),
        )
    }

    /// Total horizontal padding (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

/// Compute centered position of a child within a parent.
pub fn center(parent_size: u32, child_size: u32) -> i32 {
    ((parent_size as i32 - child_size as i32) / 2).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_inner_rect() {
        let p = Padding::uniform(4);
        let inner = p.inner_rect(Rect::new(10, 10, 100, 50));
        assert_eq!(inner, Rect::new(14, 14, 92, 42));
    }

    #[test]
    fn padding_inner_rect_saturates() {
        let p = Padding::uniform(10);
        let inner = p.inner_rect(Rect::new(0, 0, 5, 5));
        assert_eq!((inner.w, inner.h), (0, 0));
    }

    #[test]
    fn uniform_totals() {
        let p = Padding::uniform(4);
        assert_eq!(p.horizontal(), 8);
        assert_eq!(p.vertical(), 8);
        assert_eq!(Padding::uniform(0).horizontal(), 0);
    }

    #[test]
    fn center_calculation() {
        assert_eq!(center(100, 20), 40);
        assert_eq!(center(10, 20), 0); // Child larger than parent.
    }
}
