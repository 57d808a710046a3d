use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::rules::STARTING_RUNS;
use blaseball_core::{Button, Buttons, Game, Power};

use super::{adjust_power, clear_panel, Screen, Screens, StatScreen};
use crate::elements::{draw_counter, draw_footer, draw_title};
use crate::util::Tracked;
use crate::{AppDrawTarget, UiError};

/// Tally of runners who made it home, credited to the batting team.
pub struct RunsScreen<DT, E> {
    runs: Power,
    drawn: Tracked<Power>,
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> RunsScreen<DT, E> {
    pub fn runs(&self) -> Power {
        self.runs
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for RunsScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::B) {
            game.add_runs(self.runs.value());
            game.clear_count();
            return Some(Screens::Stat(StatScreen::default()));
        }
        adjust_power(&mut self.runs, buttons);
        None
    }

    fn draw_init(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>> {
        self.drawn.invalidate();
        clear_panel(display)?;
        draw_title(display, "RUNS")?;
        if let Some(team) = game.batting_team() {
            draw_footer(display, team)?;
        }
        Ok(())
    }

    fn draw_frame(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        if self.drawn.update(self.runs) {
            let center = display.bounding_box().center();
            draw_counter(display, center, self.runs.value())?;
            display.hint_refresh();
        }
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for RunsScreen<DT, E> {
    fn default() -> Self {
        Self {
            runs: Power::new(STARTING_RUNS),
            drawn: Tracked::new(),
            _phantom: PhantomData,
        }
    }
}
