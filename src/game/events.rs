// Input handling
//
// SDL events are narrowed to the two things the game reacts to, then
// applied to the round: retry on the game over screen, or scoring and the
// cook button while playing.

use super::Game;
use crate::gui::GameOverScreen;
use rand::Rng;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::Point;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

impl InputEvent {
    /// Maps an SDL event to game input; anything else is ignored
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => Some(InputEvent::Quit),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(InputEvent::PointerDown { x: *x, y: *y }),
            _ => None,
        }
    }
}

impl<R: Rng> Game<R> {
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> LoopControl {
        match event {
            InputEvent::Quit => LoopControl::Quit,
            InputEvent::PointerDown { x, y } => {
                let point = Point::new(x, y);
                if self.state.is_game_over {
                    self.click_retry(point);
                } else {
                    self.click_playfield(point, now);
                }
                LoopControl::Continue
            }
        }
    }

    fn click_retry(&mut self, point: Point) {
        let retry =
            GameOverScreen::retry_button(self.config.screen_width, self.config.screen_height);
        if retry.contains_point(point) {
            log::info!("New round (last score {})", self.state.score);
            self.state.reset();
        }
    }

    // Turkeys are checked before the button, and both can react to one click.
    fn click_playfield(&mut self, point: Point, now: Instant) {
        let mut earned = 0;
        self.state.turkeys.retain(|turkey| {
            if turkey.contains(point) {
                earned += turkey.points();
                false
            } else {
                true
            }
        });
        self.state.score += earned;

        let on_button = self
            .state
            .cook_button
            .is_some_and(|button| button.rect.contains_point(point));
        if on_button {
            log::debug!("Cook mode on ({} turkeys cooked)", self.state.turkeys.len());
            self.state.activate_cook_mode(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::CookButton;
    use crate::turkey::Turkey;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sdl2::rect::Rect;

    fn new_game() -> Game<StdRng> {
        Game::new(GameConfig::default(), StdRng::seed_from_u64(3))
    }

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown { x, y }
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut game = new_game();
        assert_eq!(game.handle_event(InputEvent::Quit, Instant::now()), LoopControl::Quit);
    }

    #[test]
    fn test_click_scores_and_removes_hit_turkeys() {
        let mut game = new_game();
        game.state.turkeys.push(Turkey::new(100, 100, 1, 60, false));
        game.state.turkeys.push(Turkey::new(300, 100, 1, 60, true));
        game.state.turkeys.push(Turkey::new(500, 100, 1, 60, false));

        game.handle_event(click(130, 130), Instant::now());
        game.handle_event(click(330, 130), Instant::now());

        assert_eq!(game.state.score, 3);
        assert_eq!(game.state.turkeys.len(), 1);
        assert_eq!(game.state.turkeys[0].x, 500);
    }

    #[test]
    fn test_overlapping_turkeys_all_score() {
        let mut game = new_game();
        game.state.turkeys.push(Turkey::new(100, 100, 1, 60, false));
        game.state.turkeys.push(Turkey::new(120, 110, 1, 60, true));

        game.handle_event(click(150, 150), Instant::now());

        assert_eq!(game.state.score, 3);
        assert!(game.state.turkeys.is_empty());
    }

    #[test]
    fn test_miss_is_noop() {
        let mut game = new_game();
        game.state.turkeys.push(Turkey::new(100, 100, 1, 60, false));

        game.handle_event(click(700, 500), Instant::now());

        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.turkeys.len(), 1);
    }

    #[test]
    fn test_turkey_and_button_in_same_batch() {
        let mut game = new_game();
        let now = Instant::now();
        game.state.turkeys.push(Turkey::new(100, 100, 1, 60, true));
        game.state.turkeys.push(Turkey::new(600, 300, 1, 60, false));
        game.state.cook_button = Some(CookButton {
            rect: Rect::new(300, 400, 150, 50),
            shown_at: now,
        });

        for event in [click(110, 110), click(350, 420)] {
            game.handle_event(event, now);
        }

        assert_eq!(game.state.score, 2);
        assert_eq!(game.state.turkeys.len(), 1);
        assert!(game.state.cook_mode_active());
        assert!(game.state.cook_button.is_none());
        assert!(game.state.turkeys[0].is_cooked());
    }

    #[test]
    fn test_single_click_can_score_and_activate() {
        let mut game = new_game();
        let now = Instant::now();
        game.state.turkeys.push(Turkey::new(300, 380, 1, 60, false));
        game.state.cook_button = Some(CookButton {
            rect: Rect::new(300, 400, 150, 50),
            shown_at: now,
        });

        game.handle_event(click(320, 410), now);

        // Scored at the raw value, since turkeys are checked first
        assert_eq!(game.state.score, 1);
        assert!(game.state.turkeys.is_empty());
        assert!(game.state.cook_mode_active());
    }

    #[test]
    fn test_clicks_ignored_on_game_over_except_retry() {
        let mut game = new_game();
        game.state.is_game_over = true;
        game.state.score = 9;
        game.state.turkeys.push(Turkey::new(100, 100, 1, 60, false));

        game.handle_event(click(110, 110), Instant::now());
        assert_eq!(game.state.score, 9);
        assert!(game.state.is_game_over);

        // Retry button sits at (325, 350) on an 800x600 screen
        game.handle_event(click(400, 375), Instant::now());
        assert_eq!(game.state.score, 0);
        assert!(!game.state.is_game_over);
        assert!(!game.state.cook_mode_active());
        assert!(game.state.cook_button.is_none());
        assert!(game.state.turkeys.is_empty());
    }

    #[test]
    fn test_from_sdl_maps_quit_and_clicks() {
        assert_eq!(
            InputEvent::from_sdl(&Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
        let mouse = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 12,
            y: 34,
        };
        assert_eq!(
            InputEvent::from_sdl(&mouse),
            Some(InputEvent::PointerDown { x: 12, y: 34 })
        );
    }

    #[test]
    fn test_from_sdl_ignores_other_buttons() {
        for button in [MouseButton::Right, MouseButton::Middle] {
            let mouse = Event::MouseButtonDown {
                timestamp: 0,
                window_id: 1,
                which: 0,
                mouse_btn: button,
                clicks: 1,
                x: 12,
                y: 34,
            };
            assert_eq!(InputEvent::from_sdl(&mouse), None);
        }
    }
}
