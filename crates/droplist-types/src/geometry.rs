//! Screen-space rectangles and sprite-sheet regions.

use serde::{Deserialize, Serialize};

/// An axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// One past the bottom row.
    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Half-open containment test: the right and bottom edges are outside.
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// A source rectangle inside a sprite sheet texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteRegion {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRegion {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(5, 10));
        assert!(!r.contains(-1, 5));
    }

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let r = Rect::new(5, 5, 0, 0);
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn sprite_region_empty() {
        assert!(SpriteRegion::new(0, 0, 0, 8).is_empty());
        assert!(SpriteRegion::new(0, 0, 8, 0).is_empty());
        assert!(!SpriteRegion::new(0, 0, 8, 8).is_empty());
    }

    #[test]
    fn sprite_region_from_inline_table() {
        #[derive(Deserialize)]
        struct Wrapper {
            region: SpriteRegion,
        }
        let w: Wrapper = toml::from_str("region = { x = 1, y = 2, w = 3, h = 4 }").unwrap();
        assert_eq!(w.region, SpriteRegion::new(1, 2, 3, 4));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn contains_matches_half_open_bounds(
                x in -100i32..100,
                y in -100i32..100,
                w in 0u32..50,
                h in 0u32..50,
                px in -200i32..200,
                py in -200i32..200,
            ) {
                let r = Rect::new(x, y, w, h);
                let expected = x <= px && px < x + w as i32 && y <= py && py < y + h as i32;
                prop_assert_eq!(r.contains(px, py), expected);
            }

            #[test]
            fn far_edges_are_outside(
                x in -100i32..100,
                y in -100i32..100,
                w in 1u32..50,
                h in 1u32..50,
            ) {
                let r = Rect::new(x, y, w, h);
                prop_assert!(r.contains(x, y));
                prop_assert!(r.contains(r.right() - 1, r.bottom() - 1));
                prop_assert!(!r.contains(r.right(), y));
                prop_assert!(!r.contains(x, r.bottom()));
            }
        }
    }
}
