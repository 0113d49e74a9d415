//! Controller / keyboard navigation ids.
//!
//! The host's directional-navigation system walks widgets by id, so every
//! slot gets an id that must be unique across everything on screen. Ids are
//! allocated from a base: slot `i` gets `base + i`.

use droplist_types::config::DEFAULT_NAV_ID_BASE;

/// Host-wide controller-navigation id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavId(pub i32);

/// Neighbor link from one slot to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    /// Move to the slot with this id.
    Slot(NavId),
    /// Nothing in this direction (top edge).
    None,
    /// End of the column; the host decides where focus goes next.
    Wrap,
}

/// Sequential id allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavIds {
    pub base: i32,
}

impl NavIds {
    pub const fn new(base: i32) -> Self {
        Self { base }
    }

    /// Id for the slot at `position` in the column.
    pub fn id_for(&self, position: usize) -> NavId {
        NavId(self.base.saturating_add(position as i32))
    }

    /// Ids and `(up, down)` links for a column of `count` slots.
    ///
    /// The top slot's `up` is [`NavLink::None`]; the bottom slot's `down` is
    /// [`NavLink::Wrap`].
    pub fn link_column(&self, count: usize) -> Vec<(NavId, NavLink, NavLink)> {
        (0..count)
            .map(|i| {
                let up = if i == 0 {
                    NavLink::None
                } else {
                    NavLink::Slot(self.id_for(i - 1))
                };
                let down = if i + 1 == count {
                    NavLink::Wrap
                } else {
                    NavLink::Slot(self.id_for(i + 1))
                };
                (self.id_for(i), up, down)
            })
            .collect()
    }
}

impl Default for NavIds {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_ID_BASE)
    }
}
