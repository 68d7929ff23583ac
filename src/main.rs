use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

mod config;
mod error;
mod frame_pacer;
mod game;
mod gui;
mod render;
mod sprite;
mod text;
mod turkey;

use config::{DEFAULT_CONFIG_PATH, GameConfig};
use error::GameError;
use frame_pacer::FramePacer;
use game::{Game, InputEvent, LoopControl};
use render::{CanvasRenderer, Renderer};
use sprite::SpriteTextures;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{}", e);
        if matches!(e, GameError::AssetLoad { .. }) {
            log::error!("Make sure the turkey sprites exist under assets/sprites/");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Turkey Drop Game", config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    let canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    log::info!("Window: {}x{}", config.screen_width, config.screen_height);

    let texture_creator = canvas.texture_creator();
    let sprites = SpriteTextures::load(&texture_creator, &config)?;
    let mut renderer = CanvasRenderer::new(canvas, sprites);
    let mut event_pump = sdl_context.event_pump()?;

    let mut pacer = FramePacer::new(config.target_fps);
    log::debug!("Frame interval: {:?}", pacer.frame_interval());
    let mut game = Game::new(config, StdRng::from_entropy());

    log::info!("Click the turkeys before they land! Grab COOK MODE for double points.");

    'running: loop {
        let now = Instant::now();
        for event in event_pump.poll_iter() {
            if let Some(input) = InputEvent::from_sdl(&event) {
                if game.handle_event(input, now) == LoopControl::Quit {
                    break 'running;
                }
            }
        }

        game.update(Instant::now());
        game.render(&mut renderer)?;
        renderer.present();

        pacer.wait();
    }

    log::info!("Thanks for playing! Score: {}", game.state.score);
    Ok(())
}
