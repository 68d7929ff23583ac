//! Score and status readout in the top-left corner while playing.

use crate::render::Renderer;
use sdl2::pixels::Color;

#[derive(Debug, Clone)]
pub struct HudStyle {
    pub x: i32,
    pub score_y: i32,
    pub status_y: i32,
    pub scale: u32,
    pub text_color: Color,
    /// Status line color while cook mode runs
    pub cook_color: Color,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            x: 10,
            score_y: 10,
            status_y: 40,
            scale: 3,
            text_color: Color::RGB(0, 0, 0),
            cook_color: Color::RGB(255, 0, 0),
        }
    }
}

pub struct Hud {
    style: HudStyle,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HudStyle::default(),
        }
    }

    pub fn render(
        &self,
        renderer: &mut impl Renderer,
        score: u32,
        cook_mode_active: bool,
    ) -> Result<(), String> {
        let style = &self.style;
        renderer.draw_text(
            &format!("Score: {}", score),
            style.x,
            style.score_y,
            style.text_color,
            style.scale,
        )?;

        let (status, color) = if cook_mode_active {
            ("COOK MODE: ACTIVE", style.cook_color)
        } else {
            ("Status: Normal", style.text_color)
        };
        renderer.draw_text(status, style.x, style.status_y, color, style.scale)
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
