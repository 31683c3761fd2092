//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! presenter mode.

use crate::app::PresenterMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Most module anchors reachable from the number row
pub const MAX_MODULE_KEYS: usize = 9;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Next,
    Prev,
    /// Jump to the module anchor with this rank
    JumpModule(usize),
    ToggleSlideSet,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding. Shift is ignored for plain
    /// bindings so `?` works on layouts that need it.
    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        if self.modifiers.is_empty() {
            event.modifiers.difference(KeyModifiers::SHIFT).is_empty()
        } else {
            event.modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<PresenterMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let mut presenting = vec![
            Keybinding::new(KeyCode::Char(' '), KeyAction::Next, "Space", "Next slide"),
            Keybinding::new(KeyCode::Right, KeyAction::Next, "→", "Next slide"),
            Keybinding::new(KeyCode::PageDown, KeyAction::Next, "PgDn", "Next slide"),
            Keybinding::new(KeyCode::Left, KeyAction::Prev, "←", "Previous slide"),
            Keybinding::new(KeyCode::PageUp, KeyAction::Prev, "PgUp", "Previous slide"),
        ];
        for rank in 0..MAX_MODULE_KEYS {
            let digit = char::from(b'1' + rank as u8);
            presenting.push(Keybinding::new(
                KeyCode::Char(digit),
                KeyAction::JumpModule(rank),
                "1-9",
                "Jump to module",
            ));
        }
        presenting.extend([
            Keybinding::new(KeyCode::Char('t'), KeyAction::ToggleSlideSet, "T", "Full/reduced deck"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
        ]);
        self.mode_bindings.insert(PresenterMode::Presenting, presenting);

        self.mode_bindings.insert(
            PresenterMode::Help,
            vec![
                Keybinding::new(KeyCode::Char('?'), KeyAction::Dismiss, "?", "Close help"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &PresenterMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Action bound to a key event in this mode, if any
    pub fn action_for(&self, mode: &PresenterMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &PresenterMode, toggle_enabled: bool) -> Vec<NavBarItem> {
        let priority = match mode {
            PresenterMode::Presenting => {
                let mut items = vec![
                    ("Space/→", "Next"),
                    ("←", "Prev"),
                    ("1-9", "Module"),
                ];
                if toggle_enabled {
                    items.push(("T", "Full/Reduced"));
                }
                items.extend([("?", "Help"), ("Q", "Quit")]);
                items
            }
            PresenterMode::Help => vec![("?/Esc", "Close"), ("Q", "Quit")],
        };

        priority
            .into_iter()
            .map(|(key, label)| NavBarItem {
                key_display: key.to_string(),
                action_label: label.to_string(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &PresenterMode, toggle_enabled: bool) -> Vec<HelpSection> {
        let bindings: Vec<&Keybinding> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| toggle_enabled || b.action != KeyAction::ToggleSlideSet)
            .collect();

        let section = |title: &str, keep: &dyn Fn(&KeyAction) -> bool| {
            let mut items: Vec<(String, String)> = Vec::new();
            for b in bindings.iter().filter(|b| keep(&b.action)) {
                // The number row shares one display entry
                if !items.iter().any(|(key, _)| *key == b.display) {
                    items.push((b.display.clone(), b.description.clone()));
                }
            }
            HelpSection {
                title: title.to_string(),
                items,
            }
        };

        [
            section("Navigation", &|a: &KeyAction| {
                matches!(a, KeyAction::Next | KeyAction::Prev | KeyAction::JumpModule(_))
            }),
            section("Deck", &|a: &KeyAction| matches!(a, KeyAction::ToggleSlideSet)),
            section("General", &|a: &KeyAction| {
                matches!(a, KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit)
            }),
        ]
        .into_iter()
        .filter(|s| !s.items.is_empty())
        .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let ctx = KeybindingContext::new();
        let mode = PresenterMode::Presenting;
        for code in [KeyCode::Char(' '), KeyCode::Right, KeyCode::PageDown] {
            assert_eq!(ctx.action_for(&mode, &key(code)), Some(KeyAction::Next));
        }
        for code in [KeyCode::Left, KeyCode::PageUp] {
            assert_eq!(ctx.action_for(&mode, &key(code)), Some(KeyAction::Prev));
        }
    }

    #[test]
    fn test_number_row_maps_to_module_rank() {
        let ctx = KeybindingContext::new();
        let mode = PresenterMode::Presenting;
        assert_eq!(
            ctx.action_for(&mode, &key(KeyCode::Char('1'))),
            Some(KeyAction::JumpModule(0))
        );
        assert_eq!(
            ctx.action_for(&mode, &key(KeyCode::Char('9'))),
            Some(KeyAction::JumpModule(8))
        );
        assert_eq!(ctx.action_for(&mode, &key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let ctx = KeybindingContext::new();
        let mode = PresenterMode::Presenting;
        assert_eq!(ctx.action_for(&mode, &key(KeyCode::Up)), None);
        assert_eq!(ctx.action_for(&mode, &key(KeyCode::Enter)), None);
        assert_eq!(
            ctx.action_for(&mode, &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            ctx.action_for(&PresenterMode::Presenting, &event),
            Some(KeyAction::Help)
        );
        assert_eq!(
            ctx.action_for(&PresenterMode::Help, &event),
            Some(KeyAction::Dismiss)
        );
    }

    #[test]
    fn test_help_mode_swallows_navigation() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.action_for(&PresenterMode::Help, &key(KeyCode::Right)), None);
        assert_eq!(
            ctx.action_for(
                &PresenterMode::Help,
                &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_help_content_hides_toggle_when_not_offered() {
        let ctx = KeybindingContext::new();
        let without = ctx.get_help_content(&PresenterMode::Presenting, false);
        assert!(without.iter().all(|s| s.title != "Deck"));

        let with = ctx.get_help_content(&PresenterMode::Presenting, true);
        assert!(with.iter().any(|s| s.title == "Deck"));

        let nav = &with[0];
        assert_eq!(nav.title, "Navigation");
        assert_eq!(nav.items.iter().filter(|(k, _)| k == "1-9").count(), 1);
    }

    #[test]
    fn test_nav_items_follow_toggle() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&PresenterMode::Presenting, false);
        assert!(items.iter().all(|i| i.key_display != "T"));
        let items = ctx.get_nav_items(&PresenterMode::Presenting, true);
        assert!(items.iter().any(|i| i.key_display == "T"));
    }
}
