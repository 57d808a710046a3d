use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::rules::BALLS_PER_WALK;
use blaseball_core::{Button, Buttons, Game};

use super::{clear_panel, RunsScreen, Screen, Screens, StatScreen};
use crate::elements::{draw_headline, draw_title};
use crate::format::{self, Label};
use crate::{AppDrawTarget, UiError};

pub struct BallScreen<DT, E> {
    _phantom: PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for BallScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if !buttons.is_pressed(Button::B) {
            return None;
        }
        let walk = game.is_walk();
        game.balls %= BALLS_PER_WALK;
        if walk {
            Some(Screens::Runs(RunsScreen::default()))
        } else {
            Some(Screens::Stat(StatScreen::default()))
        }
    }

    fn draw_init(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>> {
        clear_panel(display)?;
        draw_title(display, "BALL")?;
        let (text, caption) = headline(game);
        draw_headline(display, text.as_str(), caption)
    }

    fn draw_frame(&mut self, _display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        Ok(())
    }
}

fn headline(game: &Game) -> (Label, Option<&'static str>) {
    if game.is_walk() {
        (format::text("Walk!"), Some("4 Balls"))
    } else {
        (format::count("Ball", game.balls), None)
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for BallScreen<DT, E> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}
