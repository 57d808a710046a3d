use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Game};
use log::info;

use super::{clear_panel, Screen, Screens, SplashScreen};
use crate::elements::{draw_team_score, draw_title};
use crate::{config, AppDrawTarget, UiError};

const FIRST_ROW: i32 = 50;

/// Final score, winner highlighted. A tie highlights nobody.
pub struct ScoreScreen<DT, E> {
    _phantom: PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for ScoreScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::B) {
            info!("final score: {}", game);
            return Some(Screens::Splash(SplashScreen::default()));
        }
        None
    }

    fn draw_init(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>> {
        clear_panel(display)?;
        draw_title(display, "GAME OVER")?;

        let winner = game.winner();
        for team in 0..2 {
            draw_team_score(
                display,
                FIRST_ROW + team as i32 * (config::TEAM_ROW_HEIGHT as i32 + 5),
                game.team(team),
                game.score(team),
                winner == Some(team),
            )?;
        }
        Ok(())
    }

    fn draw_frame(&mut self, _display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for ScoreScreen<DT, E> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}
