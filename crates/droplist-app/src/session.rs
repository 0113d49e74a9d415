//! Replays a scenario against a dropdown, drawing after every event.

use anyhow::Result;
use serde::Serialize;

use droplist_types::geometry::Rect;
use droplist_types::input::InputEvent;
use droplist_ui::{DrawContext, Dropdown, Theme};

use crate::scenario::Scenario;
use crate::trace_backend::TraceBackend;

/// Observable dropdown state after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub selected: String,
    pub selected_index: usize,
    pub first_visible: usize,
    pub max_first_visible: usize,
    pub page_size: usize,
    pub visible: Vec<String>,
    pub bounds: Rect,
    pub top_nav_id: Option<i32>,
    pub frames: usize,
}

pub struct Session {
    dropdown: Dropdown<String>,
    backend: TraceBackend,
    theme: Theme,
    pointer: Option<(i32, i32)>,
    frames: usize,
}

impl Session {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        let (width, height) = scenario.viewport;
        let backend = TraceBackend::new(width, height);
        let mut dropdown = Dropdown::new(
            &scenario.selected,
            scenario.values.clone(),
            |v| v.clone(),
            (scenario.x, scenario.y),
            &backend,
            height,
            &scenario.config,
        )?;
        if let Some(base) = scenario.nav_base {
            dropdown.set_nav_base(base);
        }
        log::info!(
            "Dropdown ready: {} options, {} visible, selected '{}'",
            dropdown.options().len(),
            dropdown.page_size(),
            dropdown.selected_label(),
        );
        Ok(Self {
            dropdown,
            backend,
            theme: scenario.theme.theme(),
            pointer: None,
            frames: 0,
        })
    }

    /// Apply one event. Returns `false` once the scenario asks to quit.
    pub fn step(&mut self, event: &InputEvent) -> Result<bool> {
        match event {
            InputEvent::Quit => return Ok(false),
            InputEvent::CursorMove { x, y } => self.pointer = Some((*x, *y)),
            InputEvent::Resize { width, height } => self.backend.resize(*width, *height),
            _ => {},
        }
        if let Some(value) = self.dropdown.handle_input(event, &self.backend) {
            log::info!("Selected '{value}'");
        }
        self.draw()?;
        Ok(true)
    }

    /// Replay every event until the end or a quit.
    pub fn run(&mut self, events: &[InputEvent]) -> Result<()> {
        self.draw()?;
        for event in events {
            if !self.step(event)? {
                log::info!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        {
            let mut ctx = DrawContext::new(&mut self.backend, &self.theme);
            if let Some((x, y)) = self.pointer {
                ctx = ctx.with_pointer(x, y);
            }
            self.dropdown.draw(&mut ctx, 1.0)?;
        }
        let (stats, texts) = self.backend.end_frame();
        self.frames += 1;
        log::info!(
            "frame {}: {:?} ({} fills, {} texts)",
            self.frames,
            texts,
            stats.fills,
            stats.texts,
        );
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let dd = &self.dropdown;
        Snapshot {
            selected: dd.selected_value().clone(),
            selected_index: dd.selected_index(),
            first_visible: dd.first_visible(),
            max_first_visible: dd.max_first_visible(),
            page_size: dd.page_size(),
            visible: dd.visible_options().map(|o| o.label().to_string()).collect(),
            bounds: dd.bounds(),
            top_nav_id: dd.top_nav_id().map(|id| id.0),
            frames: self.frames,
        }
    }
}
