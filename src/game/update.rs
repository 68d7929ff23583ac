// Per-frame game logic
//
// Spawning, falling and the two cook mode timers. Nothing here runs once
// the round is over; the state stays frozen until the player retries.

use super::{CookButton, Game};
use crate::turkey;
use rand::Rng;
use sdl2::rect::Rect;
use std::time::Instant;

/// Cook buttons never appear above this line (keeps the HUD clear)
const BUTTON_TOP_MARGIN: i32 = 50;
/// Cook buttons never appear closer than this to the bottom edge
pub const BUTTON_BOTTOM_MARGIN: i32 = 100;

/// One-in-`n` roll; `n == 0` never succeeds.
fn one_in<R: Rng>(rng: &mut R, n: u32) -> bool {
    n != 0 && rng.gen_ratio(1, n)
}

impl<R: Rng> Game<R> {
    pub fn update(&mut self, now: Instant) {
        if self.state.is_game_over {
            return;
        }

        self.spawn_turkey();

        if self.drop_turkeys() {
            self.state.is_game_over = true;
            log::info!("Game over! Final score: {}", self.state.score);
            return;
        }

        self.expire_cook_mode(now);
        self.update_cook_button(now);
    }

    fn spawn_turkey(&mut self) {
        if one_in(&mut self.rng, self.config.spawn_rate) {
            let cooked = self.state.cook_mode_active();
            let turkey = turkey::spawn(&mut self.rng, &self.config, cooked);
            self.state.turkeys.push(turkey);
        }
    }

    /// Moves every turkey; true if any of them reached the bottom edge
    fn drop_turkeys(&mut self) -> bool {
        let floor_y = self.config.screen_height as i32;
        let mut landed = false;
        for turkey in self.state.turkeys.iter_mut() {
            landed |= turkey::fall(turkey, floor_y);
        }
        landed
    }

    fn expire_cook_mode(&mut self, now: Instant) {
        if let Some(started_at) = self.state.cook_mode_started_at {
            if now.saturating_duration_since(started_at) >= self.config.cook_mode_duration() {
                log::debug!("Cook mode expired");
                self.state.deactivate_cook_mode();
            }
        }
    }

    fn update_cook_button(&mut self, now: Instant) {
        match self.state.cook_button {
            Some(button) => {
                let shown_for = now.saturating_duration_since(button.shown_at);
                if shown_for >= self.config.cook_button_duration() {
                    log::debug!("Cook button expired unclicked");
                    self.state.cook_button = None;
                }
            }
            None => {
                if !self.state.cook_mode_active()
                    && one_in(&mut self.rng, self.config.cook_button_chance)
                {
                    let rect = self.random_button_rect();
                    log::debug!("Cook button shown at ({}, {})", rect.x(), rect.y());
                    self.state.cook_button = Some(CookButton { rect, shown_at: now });
                }
            }
        }
    }

    fn random_button_rect(&mut self) -> Rect {
        let width = self.config.cook_button_width;
        let height = self.config.cook_button_height;
        let max_x = (self.config.screen_width - width) as i32;
        let max_y = self.config.screen_height as i32 - BUTTON_BOTTOM_MARGIN;
        let x = self.rng.gen_range(0..=max_x);
        let y = self.rng.gen_range(BUTTON_TOP_MARGIN..=max_y);
        Rect::new(x, y, width, height)
    }
}
