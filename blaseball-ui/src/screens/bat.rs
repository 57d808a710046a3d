use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::at_bat::{self, SwingOutcome};
use blaseball_core::rules::STARTING_BAT;
use blaseball_core::{Button, Buttons, Counter, Game, Power};
use embedded_graphics::geometry::Point;
use log::debug;

use super::{
    adjust_power, clear_panel, AskCatchScreen, BallScreen, Screen, Screens, StrikeScreen,
};
use crate::elements::{draw_counter, draw_subtitle, draw_title, draw_versus};
use crate::format::{self, Label};
use crate::util::Tracked;
use crate::{AppDrawTarget, UiError};

/// Batter answers the pitch. The subtitle previews what the swing would do.
pub struct BatScreen<DT, E> {
    pitch: Power,
    bat: Power,
    drawn: Tracked<Power>,
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> BatScreen<DT, E> {
    pub fn new(pitch: Power) -> Self {
        Self {
            pitch,
            bat: Power::new(STARTING_BAT),
            drawn: Tracked::new(),
            _phantom: PhantomData,
        }
    }

    pub fn pitch(&self) -> Power {
        self.pitch
    }

    pub fn bat(&self) -> Power {
        self.bat
    }

    fn outcome(&self) -> SwingOutcome {
        at_bat::swing(self.pitch.value(), self.bat.value())
    }

    fn subtitle(&self) -> Label {
        match self.outcome() {
            SwingOutcome::Strike => format::text("Strike!"),
            SwingOutcome::Ball => format::text("Ball!"),
            SwingOutcome::Hit { base } => format::hit(base),
        }
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for BatScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::B) {
            let outcome = self.outcome();
            debug!("swing {:?} against {:?}: {:?}", self.bat, self.pitch, outcome);
            return Some(match outcome {
                SwingOutcome::Ball => {
                    game.increment(Counter::Balls);
                    Screens::Ball(BallScreen::default())
                }
                SwingOutcome::Strike => {
                    game.increment(Counter::Strikes);
                    Screens::Strike(StrikeScreen::default())
                }
                SwingOutcome::Hit { .. } => {
                    Screens::AskCatch(AskCatchScreen::new(self.pitch, self.bat))
                }
            });
        }
        adjust_power(&mut self.bat, buttons);
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        self.drawn.invalidate();
        clear_panel(display)?;
        draw_title(display, "BAT")?;

        let center = display.bounding_box().center();
        let quarter = display.bounding_box().size.width as i32 / 4;
        draw_counter(display, center - Point::new(quarter, 0), self.pitch.value())?;
        draw_versus(display)
    }

    fn draw_frame(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        if !self.drawn.update(self.bat) {
            return Ok(());
        }

        let center = display.bounding_box().center();
        let quarter = display.bounding_box().size.width as i32 / 4;
        draw_counter(display, center + Point::new(quarter, 0), self.bat.value())?;

        draw_subtitle(display, self.subtitle().as_str())?;

        display.hint_refresh();
        Ok(())
    }
}
