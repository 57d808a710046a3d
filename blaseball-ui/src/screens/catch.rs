use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::at_bat;
use blaseball_core::rules::STARTING_CATCH;
use blaseball_core::{Button, Buttons, Counter, Game, Power};
use embedded_graphics::geometry::Point;
use log::debug;

use super::{adjust_power, clear_panel, OutScreen, RunsScreen, Screen, Screens};
use crate::elements::{draw_counter, draw_subtitle, draw_title, draw_versus};
use crate::format::{self, Label};
use crate::util::Tracked;
use crate::{AppDrawTarget, UiError};

/// Fielder's power against the batter's. Beating the bat is an out.
pub struct CatchScreen<DT, E> {
    pitch: Power,
    bat: Power,
    catch: Power,
    drawn: Tracked<Power>,
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> CatchScreen<DT, E> {
    pub fn new(pitch: Power, bat: Power) -> Self {
        Self {
            pitch,
            bat,
            catch: Power::new(STARTING_CATCH),
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

    pub fn catch(&self) -> Power {
        self.catch
    }

    fn is_out(&self) -> bool {
        at_bat::is_caught_out(self.bat.value(), self.catch.value())
    }

    fn subtitle(&self) -> Label {
        if self.is_out() {
            format::text("Out!")
        } else {
            format::hit(at_bat::base(self.pitch.value(), self.bat.value()))
        }
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for CatchScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::B) {
            if self.is_out() {
                game.increment(Counter::Outs);
                game.balls = 0;
                debug!("caught out, {} outs", game.outs);
                return Some(Screens::Out(OutScreen::default()));
            }
            return Some(Screens::Runs(RunsScreen::default()));
        }
        adjust_power(&mut self.catch, buttons);
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        self.drawn.invalidate();
        clear_panel(display)?;
        draw_title(display, "CATCH")?;

        let center = display.bounding_box().center();
        let quarter = display.bounding_box().size.width as i32 / 4;
        draw_counter(display, center - Point::new(quarter, 0), self.bat.value())?;
        draw_versus(display)
    }

    fn draw_frame(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        if !self.drawn.update(self.catch) {
            return Ok(());
        }

        let center = display.bounding_box().center();
        let quarter = display.bounding_box().size.width as i32 / 4;
        draw_counter(display, center + Point::new(quarter, 0), self.catch.value())?;

        draw_subtitle(display, self.subtitle().as_str())?;

        display.hint_refresh();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::testing::{NullPanel, TestScreens};
    use crate::ScreenKind;

    type Catch = CatchScreen<NullPanel, Infallible>;

    #[test]
    fn test_strong_catch_is_an_out() {
        let mut game = Game::default();
        game.balls = 2;
        game.strikes = 1;
        let mut screen = Catch::new(Power::new(10), Power::new(11));
        screen.on_button(&mut game, Button::Up.into());
        screen.on_button(&mut game, Button::Up.into());
        assert_eq!(screen.catch().value(), 12);

        let next: Option<TestScreens> = screen.on_button(&mut game, Button::B.into());
        assert_eq!(next.map(|s| s.kind()), Some(ScreenKind::Out));
        assert_eq!((game.outs, game.balls, game.strikes), (1, 0, 1));
    }

    #[test]
    fn test_equal_catch_lets_runners_score() {
        let mut game = Game::default();
        let mut screen = Catch::new(Power::new(10), Power::new(11));
        screen.on_button(&mut game, Button::Up.into());

        let next: Option<TestScreens> = screen.on_button(&mut game, Button::B.into());
        assert_eq!(next.map(|s| s.kind()), Some(ScreenKind::Runs));
        assert_eq!(game, Game::default());
    }

    #[test]
    fn test_subtitle_measures_hit_against_pitch() {
        let subtitle = |bat, catch| {
            let screen = Catch {
                catch: Power::new(catch),
                ..Catch::new(Power::new(10), Power::new(bat))
            };
            screen.subtitle()
        };
        assert_eq!(subtitle(12, 13).as_str(), "Out!");
        assert_eq!(subtitle(12, 12).as_str(), "Base 2");
        assert_eq!(subtitle(15, 3).as_str(), "Homerun!");
    }
}
