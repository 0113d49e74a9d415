//! droplist-ui: the dropdown widget and the drawing helpers it renders with.
//!
//! All rendering goes through `RenderBackend` trait methods and all layout
//! through `TextMetrics`, with no platform-specific code.

pub mod context;
pub mod dropdown;
pub mod layout;
pub mod nav;
pub mod skin;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::DrawContext;
pub use dropdown::{Dropdown, DropdownOption, RowState, Slot};
pub use layout::Padding;
pub use nav::{NavId, NavIds, NavLink};
pub use skin::DropdownSkin;
pub use theme::Theme;
