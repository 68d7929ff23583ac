//! Game Over Screen
//!
//! Replaces the playfield once a turkey lands: gray backdrop, a red banner,
//! the final score and a "Try Again?" button. Clicking the button is handled
//! by the game loop, which asks [`GameOverScreen::retry_button`] where it is.

use crate::render::Renderer;
use crate::text::{centered_x, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const RETRY_WIDTH: u32 = 150;
const RETRY_HEIGHT: u32 = 50;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub background_color: Color,

    /// "GAME OVER" banner color
    pub title_color: Color,
    pub title_scale: u32,

    pub score_color: Color,
    pub score_scale: u32,

    pub button_color: Color,
    pub button_text_color: Color,
    pub button_text_scale: u32,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            background_color: Color::RGB(220, 220, 220),
            title_color: Color::RGB(255, 0, 0),
            title_scale: 8,
            score_color: Color::RGB(0, 0, 0),
            score_scale: 3,
            button_color: Color::RGB(0, 200, 0),
            button_text_color: Color::RGB(255, 255, 255),
            button_text_scale: 2,
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    /// Retry button bounds, centered horizontally just below the middle
    pub fn retry_button(screen_width: u32, screen_height: u32) -> Rect {
        let x = (screen_width / 2) as i32 - (RETRY_WIDTH / 2) as i32;
        let y = (screen_height / 2) as i32 + 50;
        Rect::new(x, y, RETRY_WIDTH, RETRY_HEIGHT)
    }

    pub fn render(
        &self,
        renderer: &mut impl Renderer,
        final_score: u32,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<(), String> {
        let style = &self.style;
        let center_y = (screen_height / 2) as i32;
        renderer.clear(style.background_color)?;

        let title = "GAME OVER";
        renderer.draw_text(
            title,
            centered_x(title, style.title_scale, 0, screen_width),
            center_y - 100,
            style.title_color,
            style.title_scale,
        )?;

        let score_text = format!("Final Score: {}", final_score);
        renderer.draw_text(
            &score_text,
            centered_x(&score_text, style.score_scale, 0, screen_width),
            center_y,
            style.score_color,
            style.score_scale,
        )?;

        let button = Self::retry_button(screen_width, screen_height);
        renderer.fill_rect(button, style.button_color)?;

        let label = "Try Again?";
        let spare_height = button.height().saturating_sub(text_height(style.button_text_scale));
        let label_y = button.y() + spare_height as i32 / 2;
        renderer.draw_text(
            label,
            centered_x(label, style.button_text_scale, button.x(), button.width()),
            label_y,
            style.button_text_color,
            style.button_text_scale,
        )?;

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingRenderer};

    #[test]
    fn test_retry_button_position() {
        assert_eq!(GameOverScreen::retry_button(800, 600), Rect::new(325, 350, 150, 50));
    }

    #[test]
    fn test_render_shows_banner_score_and_button() {
        let mut renderer = RecordingRenderer::default();
        GameOverScreen::new().render(&mut renderer, 17, 800, 600).unwrap();

        assert_eq!(renderer.calls[0], DrawCall::Clear(Color::RGB(220, 220, 220)));
        assert_eq!(renderer.texts(), vec!["GAME OVER", "Final Score: 17", "Try Again?"]);
        assert!(renderer.calls.contains(&DrawCall::FillRect(
            Rect::new(325, 350, 150, 50),
            Color::RGB(0, 200, 0)
        )));
    }
}
