// Game module - Contains the game loop state and per-frame logic
//
// This module contains:
// - state.rs: GameState and the cook button record
// - events.rs: Input translation and click handling
// - update.rs: Spawning, falling, cook mode timers
// - rendering.rs: Drawing the playfield and the game over screen

pub mod events;
pub mod rendering;
pub mod state;
pub mod update;

pub use events::{InputEvent, LoopControl};
pub use state::{CookButton, GameState};

use crate::config::GameConfig;
use crate::gui::{GameOverScreen, Hud};
use rand::Rng;

/// Owns the round state plus the tuning and RNG that drive it.
///
/// One frame is `handle_event` for each polled event, then `update`, then
/// `render`. Time is passed in so the timers can be driven from tests.
pub struct Game<R: Rng> {
    pub state: GameState,
    pub config: GameConfig,
    rng: R,
    hud: Hud,
    game_over_screen: GameOverScreen,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Game {
            state: GameState::new(),
            config,
            rng,
            hud: Hud::new(),
            game_over_screen: GameOverScreen::new(),
        }
    }
}
