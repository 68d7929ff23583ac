use crate::config::GameConfig;
use crate::error::GameError;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

/// Which turkey image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Turkey,
    CookedTurkey,
}

impl Sprite {
    pub fn for_turkey(cooked: bool) -> Self {
        if cooked { Sprite::CookedTurkey } else { Sprite::Turkey }
    }
}

/// The two turkey images, loaded once at startup
pub struct SpriteTextures<'a> {
    turkey: Texture<'a>,
    cooked: Texture<'a>,
}

impl<'a> SpriteTextures<'a> {
    /// Loads both sprites; any failure is fatal to the caller.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        Ok(SpriteTextures {
            turkey: load_texture(texture_creator, &config.turkey_sprite)?,
            cooked: load_texture(texture_creator, &config.cooked_sprite)?,
        })
    }

    pub fn get(&self, sprite: Sprite) -> &Texture<'a> {
        match sprite {
            Sprite::Turkey => &self.turkey,
            Sprite::CookedTurkey => &self.cooked,
        }
    }
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, GameError> {
    let texture = texture_creator
        .load_texture(path)
        .map_err(|reason| GameError::AssetLoad {
            path: path.to_string(),
            reason,
        })?;
    log::debug!("Loaded sprite {}", path);
    Ok(texture)
}
