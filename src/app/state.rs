//! Application state definitions
//!
//! Everything the event loop mutates in response to input lives here, apart
//! from the terminal and the loader channel, so it can be driven directly
//! from tests.

use tracing::{debug, info};

use crate::components::keybindings::KeyAction;
use crate::loader::AssetBoard;
use crate::presentation::Presentation;
use crate::ui::HitTarget;

/// Presenter operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenterMode {
    /// Slides on screen, navigation keys active
    Presenting,
    /// Help overlay on top of the current slide
    Help,
}

/// What handling an input did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Nothing observable changed
    None,
    /// Overlay or status text changed, position did not
    Redraw,
    /// The current slide changed
    Moved,
    /// The active sequence was rebuilt
    Rebuilt,
    /// Exit requested
    Quit,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub presentation: Presentation,
    /// Whether the full/reduced toggle is offered
    pub toggle_enabled: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Readiness of assets for the current generation
    pub assets: AssetBoard,
}

impl AppState {
    pub fn new(presentation: Presentation, toggle_enabled: bool) -> Self {
        let assets = AssetBoard::new(presentation.generation());
        Self {
            presentation,
            toggle_enabled,
            help_visible: false,
            status_message: String::new(),
            assets,
        }
    }

    pub fn mode(&self) -> PresenterMode {
        if self.help_visible {
            PresenterMode::Help
        } else {
            PresenterMode::Presenting
        }
    }

    /// Apply a key action
    pub fn handle_action(&mut self, action: KeyAction) -> StateChange {
        match action {
            KeyAction::Quit => StateChange::Quit,
            KeyAction::Help | KeyAction::Dismiss => {
                self.help_visible = !self.help_visible;
                StateChange::Redraw
            }
            KeyAction::Next => moved(self.presentation.next()),
            KeyAction::Prev => moved(self.presentation.prev()),
            KeyAction::JumpModule(rank) => moved(self.presentation.jump_to_module(rank)),
            KeyAction::ToggleSlideSet => self.toggle_slide_set(),
        }
    }

    /// Apply a click on a hit-tested region
    pub fn handle_click(&mut self, target: HitTarget) -> StateChange {
        if self.help_visible {
            return StateChange::None;
        }
        match target {
            HitTarget::Anchor(rank) => moved(self.presentation.jump_to_module(rank)),
            HitTarget::Prev => moved(self.presentation.prev()),
            HitTarget::Next => moved(self.presentation.next()),
            HitTarget::DeckBadge => self.toggle_slide_set(),
        }
    }

    /// Open on the slide with display id `id`; out-of-range ids are ignored
    pub fn start_at(&mut self, id: u32) -> bool {
        match (id as usize).checked_sub(1) {
            Some(index) if index < self.presentation.len() => self.presentation.jump(index),
            _ => {
                debug!("Start slide {} outside 1..={}", id, self.presentation.len());
                false
            }
        }
    }

    fn toggle_slide_set(&mut self) -> StateChange {
        if !self.toggle_enabled {
            debug!("Slide-set toggle not offered, ignoring");
            return StateChange::None;
        }
        if !self.presentation.toggle_slide_set() {
            return StateChange::None;
        }

        self.assets.reset(self.presentation.generation());
        self.status_message = format!(
            "{} deck: {} slides",
            if self.presentation.include_all() { "Full" } else { "Reduced" },
            self.presentation.len()
        );
        info!("{}", self.status_message);
        StateChange::Rebuilt
    }
}

fn moved(changed: bool) -> StateChange {
    if changed {
        StateChange::Moved
    } else {
        StateChange::None
    }
}
