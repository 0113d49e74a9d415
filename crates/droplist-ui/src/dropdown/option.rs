//! Options and the on-screen slots that display them.

use droplist_types::geometry::Rect;

use crate::nav::{NavId, NavLink};

/// One selectable entry in a dropdown.
///
/// Built once at construction and never mutated. `index` is the entry's
/// position in the value list the dropdown was created from.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption<T> {
    index: usize,
    label: String,
    value: T,
}

impl<T> DropdownOption<T> {
    pub(crate) fn new(index: usize, label: String, value: T) -> Self {
        Self {
            index,
            label,
            value,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// A visible row.
///
/// Slots keep their rectangle and navigation links across scrolling; only
/// the bound option changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Screen rectangle of the row.
    pub bounds: Rect,
    /// Index into the dropdown's options of the entry shown here.
    pub option: usize,
    /// This slot's navigation id.
    pub nav_id: NavId,
    /// Link to the slot above.
    pub up: NavLink,
    /// Link to the slot below.
    pub down: NavLink,
}

/// Background variant for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Pointer is over the row.
    Hover,
    /// Row shows the selected option.
    Active,
    /// Neither.
    Inactive,
}

impl RowState {
    /// Hover wins over selection.
    pub fn resolve(hovered: bool, selected: bool) -> Self {
        if hovered {
            Self::Hover
        } else if selected {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}
