// Round state
//
// Everything that changes during a round lives in GameState. The game loop
// is its only owner; reset() puts it back to how a fresh round starts.

use crate::turkey::Turkey;
use sdl2::rect::Rect;
use std::time::Instant;

/// The clickable "COOK MODE" power-up while it is on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookButton {
    pub rect: Rect,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub score: u32,
    pub is_game_over: bool,
    /// Set while cook mode is running
    pub cook_mode_started_at: Option<Instant>,
    /// Set while the cook button is visible
    pub cook_button: Option<CookButton>,
    pub turkeys: Vec<Turkey>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn cook_mode_active(&self) -> bool {
        self.cook_mode_started_at.is_some()
    }

    /// Starts cook mode: the button goes away and every live turkey is cooked.
    pub fn activate_cook_mode(&mut self, now: Instant) {
        self.cook_mode_started_at = Some(now);
        self.cook_button = None;
        self.set_all_cooked(true);
    }

    pub fn deactivate_cook_mode(&mut self) {
        self.cook_mode_started_at = None;
        self.set_all_cooked(false);
    }

    fn set_all_cooked(&mut self, cooked: bool) {
        for turkey in self.turkeys.iter_mut() {
            turkey.set_cooked(cooked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_turkeys() -> GameState {
        let mut state = GameState::new();
        state.turkeys.push(Turkey::new(0, 0, 1, 60, false));
        state.turkeys.push(Turkey::new(100, 0, 2, 60, false));
        state
    }

    #[test]
    fn test_activate_cooks_every_turkey() {
        let mut state = state_with_turkeys();
        let now = Instant::now();
        state.cook_button = Some(CookButton {
            rect: Rect::new(0, 50, 150, 50),
            shown_at: now,
        });

        state.activate_cook_mode(now);

        assert!(state.cook_mode_active());
        assert!(state.cook_button.is_none());
        assert!(state.turkeys.iter().all(|t| t.is_cooked() && t.points() == 2));
    }

    #[test]
    fn test_deactivate_uncooks_every_turkey() {
        let mut state = state_with_turkeys();
        state.activate_cook_mode(Instant::now());

        state.deactivate_cook_mode();

        assert!(!state.cook_mode_active());
        assert!(state.turkeys.iter().all(|t| !t.is_cooked() && t.points() == 1));
    }

    #[test]
    fn test_reset_restores_fresh_round() {
        let mut state = state_with_turkeys();
        state.score = 42;
        state.is_game_over = true;
        state.activate_cook_mode(Instant::now());
        state.cook_button = Some(CookButton {
            rect: Rect::new(10, 60, 150, 50),
            shown_at: Instant::now(),
        });

        state.reset();

        assert_eq!(state.score, 0);
        assert!(!state.is_game_over);
        assert!(!state.cook_mode_active());
        assert!(state.cook_button.is_none());
        assert!(state.turkeys.is_empty());
    }
}
