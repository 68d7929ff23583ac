/// Drawing backend
///
/// The game draws through the [`Renderer`] trait rather than an SDL canvas
/// directly, so the render step can run in tests against a recorder.
///
/// # Architecture
///
/// - `Renderer` trait: the draw calls a frame needs (clear, rect, sprite, text, present)
/// - `CanvasRenderer`: the SDL2 implementation, owning the canvas and sprite textures
///
/// Draw calls return `Result<(), String>` like SDL itself does.
use crate::sprite::{Sprite, SpriteTextures};
use crate::text::glyph_rects;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub trait Renderer {
    /// Fill the whole frame with `color`.
    fn clear(&mut self, color: Color) -> Result<(), String>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draw a sprite stretched to `dest`.
    fn draw_sprite(&mut self, sprite: Sprite, dest: Rect) -> Result<(), String>;

    /// Draw bitmap text with its top-left corner at (`x`, `y`).
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String>;

    /// Show the finished frame.
    fn present(&mut self);
}

pub struct CanvasRenderer<'a> {
    canvas: Canvas<Window>,
    sprites: SpriteTextures<'a>,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(canvas: Canvas<Window>, sprites: SpriteTextures<'a>) -> Self {
        CanvasRenderer { canvas, sprites }
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn draw_sprite(&mut self, sprite: Sprite, dest: Rect) -> Result<(), String> {
        self.canvas.copy(self.sprites.get(sprite), None, Some(dest))
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        for pixel in glyph_rects(text, x, y, scale) {
            self.canvas.fill_rect(pixel)?;
        }
        Ok(())
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

/// One recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Rect, Color),
    Sprite(Sprite, Rect),
    Text(String, i32, i32, Color),
}

/// Renderer that remembers what it was asked to draw
#[cfg(test)]
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub frames: usize,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<(Sprite, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Sprite(sprite, rect) => Some((*sprite, *rect)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::FillRect(rect, color));
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, dest: Rect) -> Result<(), String> {
        self.calls.push(DrawCall::Sprite(sprite, dest));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        _scale: u32,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::Text(text.to_string(), x, y, color));
        Ok(())
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
