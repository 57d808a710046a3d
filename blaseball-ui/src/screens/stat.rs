use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Counter, Game, Inning};
use embedded_graphics::geometry::Point;

use super::{
    clear_panel, BallScreen, OutScreen, PitchScreen, Screen, Screens, StrikeScreen,
};
use crate::elements::{draw_stat, draw_team_score};
use crate::util::Tracked;
use crate::{config, AppDrawTarget, UiError};

/// The scoreboard between at-bats. A/C pick a counter, UP/DOWN adjust it by
/// hand, B starts the next pitch.
pub struct StatScreen<DT, E> {
    selected: Counter,
    drawn_scores: Tracked<(u16, u16, Inning)>,
    drawn_selected: Tracked<Counter>,
    drawn_counts: [Tracked<u8>; 3],
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> StatScreen<DT, E> {
    pub fn selected(&self) -> Counter {
        self.selected
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for StatScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::A) {
            self.selected = self.selected.prev();
        } else if buttons.is_pressed(Button::B) {
            return Some(Screens::Pitch(PitchScreen::default()));
        } else if buttons.is_pressed(Button::C) {
            self.selected = self.selected.next();
        } else if buttons.is_pressed(Button::Up) {
            if game.increment(self.selected) {
                return Some(match self.selected {
                    Counter::Balls => Screens::Ball(BallScreen::default()),
                    Counter::Strikes => Screens::Strike(StrikeScreen::default()),
                    Counter::Outs => Screens::Out(OutScreen::default()),
                });
            }
        } else if buttons.is_pressed(Button::Down) {
            game.decrement(self.selected);
        }
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        self.drawn_scores.invalidate();
        self.drawn_selected.invalidate();
        for drawn in self.drawn_counts.iter_mut() {
            drawn.invalidate();
        }
        clear_panel(display)
    }

    fn draw_frame(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>> {
        let mut changed = false;

        if self
            .drawn_scores
            .update((game.score1, game.score2, game.inning))
        {
            draw_team_score(
                display,
                0,
                game.team1,
                game.score1,
                game.inning == Inning::Top,
            )?;
            draw_team_score(
                display,
                config::TEAM_ROW_HEIGHT as i32,
                game.team2,
                game.score2,
                game.inning == Inning::Bottom,
            )?;
            changed = true;
        }

        let selection_moved = self.drawn_selected.update(self.selected);
        let quarter = display.bounding_box().size.width as i32 / 4;
        for counter in Counter::ALL {
            let index = counter.index();
            let value = game.counter(counter);
            if self.drawn_counts[index].update(value) || selection_moved {
                draw_stat(
                    display,
                    Point::new(quarter * (index as i32 + 1), config::STAT_ROW_CENTER_Y),
                    index as u32,
                    value,
                    counter == self.selected,
                )?;
                changed = true;
            }
        }

        if changed {
            display.hint_refresh();
        }
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for StatScreen<DT, E> {
    fn default() -> Self {
        Self {
            selected: Counter::Balls,
            drawn_scores: Tracked::new(),
            drawn_selected: Tracked::new(),
            drawn_counts: [Tracked::new(); 3],
            _phantom: PhantomData,
        }
    }
}
