//! Screen-Space GUI
//!
//! UI drawn at fixed screen positions on top of the playfield.
//!
//! # Available Components
//!
//! - [`Hud`] - Score and cook mode status while playing
//! - [`GameOverScreen`] - Final score and the retry button
//!
//! Both draw through [`crate::render::Renderer`] and keep their colors in a
//! `Default`-able style struct.

pub mod game_over_screen;
pub mod hud;

pub use game_over_screen::GameOverScreen;
pub use hud::Hud;
