//! Screens, drawing and the app shell for the blaseball badge game.
//!
//! Everything draws into any [`AppDrawTarget`]: a monochrome
//! `embedded-graphics` target that can also invert the whole panel and be told
//! when a frame is worth pushing to the (slow) e-paper glass.

#![no_std]

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::BinaryColor;

mod app;
pub mod assets;
pub mod config;
mod elements;
mod error;
pub mod fonts;
mod format;
pub mod panic;
mod primitives;
mod screens;
#[cfg(test)]
mod testing;
mod util;

pub use app::App;
pub use assets::AssetError;
pub use error::UiError;
pub use screens::{
    AskCatchScreen, BallScreen, BatScreen, CatchScreen, OutScreen, PitchScreen, RunsScreen,
    ScoreScreen, Screen, ScreenKind, Screens, SelectScreen, SplashScreen, StatScreen,
    StrikeScreen,
};

pub trait HintRefresh {
    fn hint_refresh(&mut self);
}

/// Whole-panel colour inversion, used to tell the two players apart.
pub trait InvertColors {
    fn set_inverted(&mut self, inverted: bool);
}

pub trait AppDrawTarget<E>:
    DrawTarget<Color = BinaryColor, Error = E> + HintRefresh + InvertColors
{
}
impl<E, D: DrawTarget<Color = BinaryColor, Error = E> + HintRefresh + InvertColors>
    AppDrawTarget<E> for D
{
}
