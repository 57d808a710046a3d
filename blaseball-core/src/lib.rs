//! Game record and at-bat rules for the blaseball badge game.
//!
//! Everything here is display-agnostic; the screens in `blaseball-ui` drive
//! these types from button presses.

#![no_std]

pub mod at_bat;
mod game;
pub mod input;
mod power;
pub mod roster;
pub mod rules;

pub use at_bat::SwingOutcome;
pub use game::{Counter, Game, Inning};
pub use input::{Button, Buttons};
pub use power::Power;
pub use roster::{TeamSelection, TEAMS};
