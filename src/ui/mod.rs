//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Module dock, active module name and deck badge
//! - `slide` - Per-layout slide rendering
//! - `footer` - Navigation controls, progress bar and nav bar
//!
//! Rendering also produces a [`HitMap`] so mouse clicks can be resolved
//! against what was actually drawn in the last frame.

pub mod footer;
pub mod header;
pub mod slide;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
};

/// Clickable regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Dock anchor for the module with this rank
    Anchor(usize),
    Prev,
    Next,
    /// Full/reduced badge
    DeckBadge,
}

/// Clickable regions of the last rendered frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Target under a terminal cell, if any
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn regions(&self) -> &[(Rect, HitTarget)] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// UI renderer for the application
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI and return its clickable regions
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) -> HitMap {
        let mut hits = HitMap::default();
        let screen = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::DOCK_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::FOOTER_HEIGHT),
                Constraint::Length(UiConstants::PROGRESS_HEIGHT),
                Constraint::Length(1), // Navigation bar
            ])
            .split(screen);

        header::render_dock(f, chunks[0], state, &mut hits);
        slide::render_current_slide(f, chunks[1], state);
        footer::render_controls(f, chunks[2], state, &mut hits);
        footer::render_progress(f, chunks[3], &state.presentation);
        footer::render_nav_bar(f, chunks[4], state, keybinding_ctx);

        if state.help_visible {
            HelpOverlay::new(&state.mode(), keybinding_ctx, state.toggle_enabled)
                .render(f, screen);
        }

        hits
    }
}
