//! Dropdown widget: a paged, scrollable list of labeled values.
//!
//! The dropdown owns an immutable list of options and a fixed number of
//! slots (visible rows). Slots are laid out once per layout pass and reused
//! while scrolling; only the option each slot shows changes. The host calls
//! in for layout, drawing, clicks and scroll input -- the widget never
//! pushes events of its own.

mod option;

pub use option::{DropdownOption, RowState, Slot};

use droplist_types::backend::TextMetrics;
use droplist_types::config::DropdownConfig;
use droplist_types::error::{DropdownError, Result};
use droplist_types::geometry::{Rect, SpriteRegion};
use droplist_types::input::{Button, InputEvent};

use crate::context::DrawContext;
use crate::layout::{self, Padding};
use crate::nav::{NavId, NavIds, NavLink};
use crate::skin::DropdownSkin;

const UP_GLYPH: &str = "^";
const DOWN_GLYPH: &str = "v";

/// A scrollable dropdown list.
///
/// Invariants:
/// - `options` is non-empty and never changes after construction;
/// - exactly one option is selected;
/// - `first_visible <= max_first_visible == options.len() - page_size`;
/// - slot `i` shows option `first_visible + i`.
#[derive(Debug)]
pub struct Dropdown<T> {
    options: Vec<DropdownOption<T>>,
    selected: usize,
    first_visible: usize,
    max_first_visible: usize,
    page_size: usize,
    bounds: Rect,
    max_label_width: u32,
    max_label_height: u32,
    item_height: u32,
    slots: Vec<Slot>,
    padding: Padding,
    min_width: u32,
    font_size: u16,
    reference_text: String,
    nav: NavIds,
    skin: DropdownSkin,
}

impl<T> Dropdown<T> {
    /// Build a dropdown at `position` and lay it out for `viewport_height`.
    ///
    /// `label` formats each value once; labels are not recomputed later.
    /// The option equal to `selected` starts selected, or the first option
    /// if none matches. Fails with [`DropdownError::EmptyOptions`] when
    /// `values` is empty.
    pub fn new<M>(
        selected: &T,
        values: Vec<T>,
        label: impl Fn(&T) -> String,
        position: (i32, i32),
        metrics: &M,
        viewport_height: u32,
        config: &DropdownConfig,
    ) -> Result<Self>
    where
        T: PartialEq,
        M: TextMetrics + ?Sized,
    {
        if values.is_empty() {
            return Err(DropdownError::EmptyOptions);
        }
        config.validate()?;

        let options: Vec<_> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| DropdownOption::new(index, label(&value), value))
            .collect();
        let selected = options
            .iter()
            .position(|o| o.value() == selected)
            .unwrap_or_else(|| {
                log::warn!("Initial value not among dropdown options, selecting the first");
                0
            });

        let (x, y) = position;
        let mut dropdown = Self {
            options,
            selected,
            first_visible: 0,
            max_first_visible: 0,
            page_size: 0,
            bounds: Rect::new(x, y, 0, 0),
            max_label_width: 0,
            max_label_height: 0,
            item_height: 0,
            slots: Vec::new(),
            padding: Padding::uniform(config.layout.padding),
            min_width: config.layout.min_width,
            font_size: config.layout.font_size,
            reference_text: config.layout.reference_text.clone(),
            nav: NavIds::new(config.navigation.id_base),
            skin: DropdownSkin::from_config(&config.sprites, None),
        };
        dropdown.reinitialize_components(metrics, viewport_height);
        Ok(dropdown)
    }

    /// Replace the sprite sheet binding.
    pub fn with_skin(mut self, skin: DropdownSkin) -> Self {
        self.skin = skin;
        self
    }

    // -- Layout --

    /// Recompute sizes, page size and slots for the current viewport.
    ///
    /// Keeps the scroll offset, clamped to the new range. Calling this again
    /// with the same inputs reproduces the same geometry and bindings.
    pub fn reinitialize_components<M>(&mut self, metrics: &M, viewport_height: u32)
    where
        M: TextMetrics + ?Sized,
    {
        let widest = self
            .options
            .iter()
            .map(|o| metrics.measure_text(o.label(), self.font_size))
            .max()
            .unwrap_or(0);
        self.max_label_width = widest.max(self.min_width) + self.padding.horizontal();

        // Row height comes from the reference string, never the labels.
        let (_, reference_h) = metrics.measure_text_extents(&self.reference_text, self.font_size);
        self.max_label_height = reference_h;
        self.item_height = (reference_h + self.padding.vertical()).max(1);

        let total = self.options.len();
        let space_below = (viewport_height as i64 - self.bounds.y as i64).max(0) as u64;
        let rows_fit = (space_below / self.item_height as u64) as usize;
        self.page_size = rows_fit.min(total);
        self.max_first_visible = total - self.page_size;
        self.first_visible = self.first_visible.min(self.max_first_visible);

        self.bounds = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.max_label_width,
            self.page_size as u32 * self.item_height,
        );

        self.slots.clear();
        for i in 0..self.page_size {
            let row_y = self.bounds.y + (i as u32 * self.item_height) as i32;
            self.slots.push(Slot {
                bounds: Rect::new(self.bounds.x, row_y, self.max_label_width, self.item_height),
                option: self.first_visible + i,
                nav_id: NavId(0),
                up: NavLink::None,
                down: NavLink::Wrap,
            });
        }
        self.reinitialize_controller_flow();

        log::debug!(
            "Dropdown layout: {} options, page {} (first {} of max {}), bounds {}x{} at ({}, {})",
            total,
            self.page_size,
            self.first_visible,
            self.max_first_visible,
            self.bounds.w,
            self.bounds.h,
            self.bounds.x,
            self.bounds.y,
        );
    }

    /// Reassign navigation ids and neighbor links from slot order.
    pub fn reinitialize_controller_flow(&mut self) {
        let links = self.nav.link_column(self.slots.len());
        for (slot, (id, up, down)) in self.slots.iter_mut().zip(links) {
            slot.nav_id = id;
            slot.up = up;
            slot.down = down;
        }
    }

    /// Use a host-allocated id range starting at `base`.
    pub fn set_nav_base(&mut self, base: i32) {
        self.nav = NavIds::new(base);
        self.reinitialize_controller_flow();
    }

    // -- Scrolling --

    /// Move the page by `delta` options, clamped to the valid range.
    ///
    /// Returns `false` (and changes nothing) when the clamped offset equals
    /// the current one. Slots are rebound in place; their rectangles and
    /// navigation ids are untouched.
    pub fn scroll(&mut self, delta: i32) -> bool {
        let target = (self.first_visible as i64 + delta as i64)
            .clamp(0, self.max_first_visible as i64) as usize;
        if target == self.first_visible {
            return false;
        }
        self.first_visible = target;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.option = target + i;
        }
        log::debug!("Dropdown scrolled to {target}");
        true
    }

    /// Positive `direction` (wheel away from the user) scrolls up one row;
    /// anything else scrolls down one row.
    pub fn receive_scroll_wheel_action(&mut self, direction: i32) -> bool {
        if direction > 0 {
            self.scroll(-1)
        } else {
            self.scroll(1)
        }
    }

    /// Scroll the minimum amount that puts the selection on the page.
    pub fn scroll_selected_into_view(&mut self) -> bool {
        if self.page_size == 0 {
            return false;
        }
        let target = if self.selected < self.first_visible {
            self.selected
        } else if self.selected >= self.first_visible + self.page_size {
            self.selected + 1 - self.page_size
        } else {
            return false;
        };
        self.scroll(target as i32 - self.first_visible as i32)
    }

    // -- Selection --

    /// Select the option under `(x, y)`.
    ///
    /// Returns the newly selected value, or `None` if the point is outside
    /// every slot (selection unchanged).
    pub fn try_select_at(&mut self, x: i32, y: i32) -> Option<&T> {
        let hit = self.slots.iter().find(|s| s.bounds.contains(x, y))?.option;
        self.selected = hit;
        log::trace!("Dropdown hit at ({x}, {y}) -> option {hit}");
        Some(self.options[hit].value())
    }

    /// Select the first option equal to `value`, searching every option.
    ///
    /// Does not scroll. With `T = Option<U>`, `None` matches `None`.
    pub fn try_select_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.options.iter().position(|o| o.value() == value) {
            Some(i) => {
                self.selected = i;
                true
            },
            None => false,
        }
    }

    /// Route a host input event to the matching operation.
    ///
    /// Returns the newly selected value when a click hits a row.
    pub fn handle_input<M>(&mut self, event: &InputEvent, metrics: &M) -> Option<&T>
    where
        M: TextMetrics + ?Sized,
    {
        match event {
            InputEvent::PointerClick { x, y } => self.try_select_at(*x, *y),
            InputEvent::ScrollWheel { delta } => {
                self.receive_scroll_wheel_action(*delta);
                None
            },
            InputEvent::ButtonPress { button: Button::Up } => {
                self.scroll(-1);
                None
            },
            InputEvent::ButtonPress {
                button: Button::Down,
            } => {
                self.scroll(1);
                None
            },
            InputEvent::Resize { height, .. } => {
                self.reinitialize_components(metrics, *height);
                None
            },
            _ => None,
        }
    }

    // -- Rendering --

    /// Draw the visible rows and scroll indicators.
    ///
    /// `opacity` fades sprites and text (1.0 is fully opaque).
    pub fn draw(&self, ctx: &mut DrawContext<'_>, opacity: f32) -> Result<()> {
        let theme = ctx.theme;
        ctx.backend.push_clip_rect(self.bounds)?;
        for slot in &self.slots {
            let state = RowState::resolve(ctx.is_hovered(slot.bounds), slot.option == self.selected);
            match self.skin.texture {
                Some(tex) => {
                    let src = match state {
                        RowState::Hover => self.skin.hover,
                        RowState::Active => self.skin.active,
                        RowState::Inactive => self.skin.inactive,
                    };
                    ctx.sprite(tex, src, slot.bounds, opacity)?;
                },
                None => {
                    let color = match state {
                        RowState::Hover => theme.row_hover,
                        RowState::Active => theme.row_active,
                        RowState::Inactive => theme.row_inactive,
                    };
                    ctx.fill(slot.bounds, color, opacity)?;
                },
            }

            let text = self.padding.inner_rect(slot.bounds);
            ctx.label_styled(
                self.options[slot.option].label(),
                text.x,
                text.y,
                self.font_size,
                theme.text_primary.scale_alpha(opacity),
            )?;
        }
        ctx.backend.pop_clip_rect()?;

        if self.first_visible > 0 {
            self.draw_indicator(ctx, self.skin.up_arrow, UP_GLYPH, true, opacity)?;
        }
        if self.first_visible < self.max_first_visible {
            self.draw_indicator(ctx, self.skin.down_arrow, DOWN_GLYPH, false, opacity)?;
        }
        Ok(())
    }

    /// Draw an arrow centered above (`above`) or below the widget.
    fn draw_indicator(
        &self,
        ctx: &mut DrawContext<'_>,
        region: SpriteRegion,
        glyph: &str,
        above: bool,
        opacity: f32,
    ) -> Result<()> {
        let (w, h) = match self.skin.texture {
            Some(_) => (region.w, region.h),
            None => ctx.measure_text_extents(glyph, self.font_size),
        };
        let x = self.bounds.x + layout::center(self.bounds.w, w);
        let y = if above {
            self.bounds.y - h as i32
        } else {
            self.bounds.bottom()
        };
        match self.skin.texture {
            Some(tex) => ctx.sprite(tex, region, Rect::new(x, y, w, h), opacity),
            None => {
                let color = ctx.theme.text_secondary.scale_alpha(opacity);
                ctx.label_styled(glyph, x, y, self.font_size, color)
            },
        }
    }

    // -- Accessors --

    pub fn selected_value(&self) -> &T {
        self.options[self.selected].value()
    }

    pub fn selected_label(&self) -> &str {
        self.options[self.selected].label()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &[DropdownOption<T>] {
        &self.options
    }

    /// Options currently shown, top to bottom.
    pub fn visible_options(&self) -> impl Iterator<Item = &DropdownOption<T>> + '_ {
        self.slots.iter().map(|s| &self.options[s.option])
    }

    /// Widest label plus horizontal padding.
    pub fn max_label_width(&self) -> u32 {
        self.max_label_width
    }

    /// Measured height of the reference string.
    pub fn max_label_height(&self) -> u32 {
        self.max_label_height
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn max_first_visible(&self) -> usize {
        self.max_first_visible
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Navigation id of the top slot, if any row fits on screen.
    pub fn top_nav_id(&self) -> Option<NavId> {
        self.slots.first().map(|s| s.nav_id)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot rectangles, top to bottom.
    pub fn slot_regions(&self) -> Vec<Rect> {
        self.slots.iter().map(|s| s.bounds).collect()
    }
}
