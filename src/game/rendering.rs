// Drawing
//
// Paints one frame of whichever scene is current. Draw order while playing:
// sky, turkeys, ground strip, cook button, HUD text.

use super::Game;
use crate::render::Renderer;
use crate::sprite::Sprite;
use crate::text::{centered_x, text_height};
use crate::turkey::Turkey;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const SKY_COLOR: Color = Color::RGB(135, 206, 235);
const GROUND_COLOR: Color = Color::RGB(34, 139, 34);
const COOK_BUTTON_COLOR: Color = Color::RGB(255, 100, 0);
const COOK_BUTTON_TEXT_COLOR: Color = Color::RGB(255, 255, 255);
pub const COOK_BUTTON_TEXT_SCALE: u32 = 2;

pub fn draw_turkey(renderer: &mut impl Renderer, turkey: &Turkey) -> Result<(), String> {
    renderer.draw_sprite(Sprite::for_turkey(turkey.is_cooked()), turkey.bounds())
}

impl<R: Rng> Game<R> {
    pub fn render(&self, renderer: &mut impl Renderer) -> Result<(), String> {
        if self.state.is_game_over {
            return self.game_over_screen.render(
                renderer,
                self.state.score,
                self.config.screen_width,
                self.config.screen_height,
            );
        }

        renderer.clear(SKY_COLOR)?;

        for turkey in &self.state.turkeys {
            draw_turkey(renderer, turkey)?;
        }

        let ground = Rect::new(
            0,
            (self.config.screen_height - self.config.ground_height) as i32,
            self.config.screen_width,
            self.config.ground_height,
        );
        renderer.fill_rect(ground, GROUND_COLOR)?;

        if let Some(button) = &self.state.cook_button {
            let rect = button.rect;
            renderer.fill_rect(rect, COOK_BUTTON_COLOR)?;
            let label = "COOK MODE";
            let spare_height = rect.height().saturating_sub(text_height(COOK_BUTTON_TEXT_SCALE));
            renderer.draw_text(
                label,
                centered_x(label, COOK_BUTTON_TEXT_SCALE, rect.x(), rect.width()),
                rect.y() + spare_height as i32 / 2,
                COOK_BUTTON_TEXT_COLOR,
                COOK_BUTTON_TEXT_SCALE,
            )?;
        }

        self.hud.render(renderer, self.state.score, self.state.cook_mode_active())
    }
}
