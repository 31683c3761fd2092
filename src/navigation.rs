//! Navigation state machine
//!
//! Owns the current position in the active sequence and the direction of the
//! last move. Requests that would leave `[0, N-1]` are ignored, never errors.
//!
//! # Transitions
//!
//! ```text
//! next()        current < N-1  → current + 1, Forward
//! prev()        current > 0    → current - 1, Backward
//! jump(t)       t < N, t != current → t, sign(t - current)
//! resize(n)     current >= n   → 0, Still
//! ```

use std::cmp::Ordering;
use tracing::debug;

/// Direction of the most recent move; purely a transition hint for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Direction {
    Backward = -1,
    #[default]
    Still = 0,
    Forward = 1,
}

impl Direction {
    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

/// Position and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub direction: Direction,
}

/// Bounds-enforcing controller over a sequence of `len` slides
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
    len: usize,
}

impl NavigationController {
    /// Start at the first slide of a sequence of `len` slides
    pub fn new(len: usize) -> Self {
        Self {
            state: NavigationState::default(),
            len,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when `prev()` would be a no-op
    pub fn is_at_start(&self) -> bool {
        self.state.current_index == 0
    }

    /// True when `next()` would be a no-op
    pub fn is_at_end(&self) -> bool {
        self.state.current_index + 1 >= self.len
    }

    /// Advance one slide. Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            debug!("next() ignored at index {} of {}", self.state.current_index, self.len);
            return false;
        }
        self.state.direction = Direction::Forward;
        self.state.current_index += 1;
        true
    }

    /// Go back one slide. Returns whether the position changed.
    pub fn prev(&mut self) -> bool {
        if self.is_at_start() {
            debug!("prev() ignored at index 0");
            return false;
        }
        self.state.direction = Direction::Backward;
        self.state.current_index -= 1;
        true
    }

    /// Jump to `target`. Out-of-range targets and jumps to the current slide
    /// leave the state untouched.
    pub fn jump(&mut self, target: usize) -> bool {
        if target >= self.len {
            debug!("jump({}) ignored, sequence has {} slides", target, self.len);
            return false;
        }
        self.state.direction = match target.cmp(&self.state.current_index) {
            Ordering::Greater => Direction::Forward,
            Ordering::Less => Direction::Backward,
            Ordering::Equal => return false,
        };
        self.state.current_index = target;
        true
    }

    /// Adopt a new sequence length, resetting to the start if the current
    /// position no longer exists. Returns whether a reset happened.
    pub fn resize(&mut self, len: usize) -> bool {
        self.len = len;
        if self.state.current_index >= len && self.state != NavigationState::default() {
            debug!(
                "Index {} stranded by resize to {}, resetting",
                self.state.current_index, len
            );
            self.state = NavigationState::default();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationController::new(5);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.direction(), Direction::Still);
        assert!(nav.is_at_start());
        assert!(!nav.is_at_end());
    }

    #[test]
    fn test_next_and_prev_set_direction() {
        let mut nav = NavigationController::new(3);
        assert!(nav.next());
        assert_eq!(nav.direction(), Direction::Forward);
        assert_eq!(nav.current_index(), 1);

        assert!(nav.prev());
        assert_eq!(nav.direction(), Direction::Backward);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut nav = NavigationController::new(2);
        assert!(!nav.prev());
        assert_eq!(nav.direction(), Direction::Still);

        nav.next();
        assert!(nav.is_at_end());
        assert!(!nav.next());
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn test_jump() {
        let mut nav = NavigationController::new(10);
        assert!(nav.jump(7));
        assert_eq!(nav.current_index(), 7);
        assert_eq!(nav.direction(), Direction::Forward);

        assert!(nav.jump(2));
        assert_eq!(nav.direction(), Direction::Backward);

        // Same slide: nothing moves, direction is kept
        assert!(!nav.jump(2));
        assert_eq!(nav.direction(), Direction::Backward);

        assert!(!nav.jump(10));
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_resize_preserves_contained_position() {
        let mut nav = NavigationController::new(30);
        nav.jump(25);
        assert!(!nav.resize(43));
        assert_eq!(nav.current_index(), 25);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn test_resize_resets_stranded_position() {
        let mut nav = NavigationController::new(43);
        nav.jump(35);
        assert!(nav.resize(30));
        assert_eq!(nav.state(), NavigationState::default());
        assert_eq!(nav.len(), 30);
    }

    #[test]
    fn test_empty_sequence() {
        let mut nav = NavigationController::new(0);
        assert!(nav.is_at_start());
        assert!(nav.is_at_end());
        assert!(!nav.next());
        assert!(!nav.prev());
        assert!(!nav.jump(0));
        assert!(!nav.resize(0));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_direction_values() {
        assert_eq!(Direction::Backward.as_i8(), -1);
        assert_eq!(Direction::Still.as_i8(), 0);
        assert_eq!(Direction::Forward.as_i8(), 1);
    }
}
