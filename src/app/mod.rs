//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, PresenterMode, StateChange)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, PresenterMode, StateChange};

use crate::components::keybindings::KeybindingContext;
use crate::loader::{AssetLoader, VisibilityObserver};
use crate::ui::{HitMap, UiRenderer};
use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
    /// Background asset loads, drained every tick
    loader: AssetLoader,
    /// One-shot load triggers keyed by display id
    visibility: VisibilityObserver<u32>,
    /// Clickable regions of the last frame
    hit_map: HitMap,
}

impl App {
    /// Create a new application instance
    pub fn new(state: AppState, loader: AssetLoader) -> Self {
        info!("Creating new App instance");
        let mut app = Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            loader,
            visibility: VisibilityObserver::new(),
            hit_map: HitMap::default(),
        };
        app.subscribe_slides();
        app.on_slide_shown();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a one-shot load for every slide of the active sequence.
    ///
    /// Called at startup and after each rebuild. Registrations from the
    /// previous sequence are dropped and in-flight loads become stale.
    fn subscribe_slides(&mut self) {
        let generation = self.state.presentation.generation();
        self.visibility.clear();
        self.loader.set_generation(generation);

        for slide in self.state.presentation.slides() {
            let requester = self.loader.requester();
            let assets = slide.displayed_assets();
            self.visibility.subscribe(slide.id, move || {
                for asset in assets {
                    requester.load(asset);
                }
            });
        }
        debug!(
            "Subscribed {} slides for generation {}",
            self.visibility.pending(),
            generation
        );
    }

    /// Signal the current slide's region as visible
    fn on_slide_shown(&mut self) {
        if let Some(id) = self.state.presentation.current_slide().map(|s| s.id) {
            if self.visibility.signal(&id) > 0 {
                debug!("Slide {} visible, loads started", id);
            }
        }
    }

    /// Follow up on a state change. Returns true when exit was requested.
    fn apply(&mut self, change: StateChange) -> bool {
        match change {
            StateChange::Quit => return true,
            StateChange::Rebuilt => {
                self.subscribe_slides();
                self.on_slide_shown();
            }
            StateChange::Moved => self.on_slide_shown(),
            StateChange::Redraw | StateChange::None => {}
        }
        false
    }

    /// Poll for completed asset loads from background threads
    fn poll_asset_messages(&mut self) {
        let applied = self.loader.poll(&mut self.state.assets);
        if applied > 0 {
            debug!("{} asset loads completed", applied);
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            self.poll_asset_messages();

            // Render UI
            terminal.draw(|f| {
                self.hit_map =
                    self.ui_renderer
                        .render(f, &self.state, &self.keybinding_context);
            })?;

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                let quit = match crossterm::event::read()? {
                    Event::Key(key_event) => self.handle_key_event(key_event),
                    Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                    // Resize needs no handling, the next draw picks up the size
                    _ => false,
                };
                if quit {
                    break;
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle keyboard input events. Returns true when exit was requested.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let mode = self.state.mode();
        match self.keybinding_context.action_for(&mode, &key_event) {
            Some(action) => {
                debug!("Key {:?} -> {:?}", key_event.code, action);
                let change = self.state.handle_action(action);
                self.apply(change)
            }
            None => false,
        }
    }

    /// Handle mouse input events. Returns true when exit was requested.
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> bool {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        match self.hit_map.target_at(mouse_event.column, mouse_event.row) {
            Some(target) => {
                debug!("Click at ({}, {}) -> {:?}", mouse_event.column, mouse_event.row, target);
                let change = self.state.handle_click(target);
                self.apply(change)
            }
            None => false,
        }
    }
}
