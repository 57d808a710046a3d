use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Counter, Game};
use log::debug;

use super::{clear_panel, OutScreen, Screen, Screens, StatScreen};
use crate::elements::{draw_headline, draw_title};
use crate::format::{self, Label};
use crate::{AppDrawTarget, UiError};

pub struct StrikeScreen<DT, E> {
    _phantom: PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for StrikeScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if !buttons.is_pressed(Button::B) {
            return None;
        }
        if game.is_side_retired() {
            return Some(Screens::Out(OutScreen::default()));
        }
        if game.is_strikeout() {
            game.increment(Counter::Outs);
            game.strikes = 0;
            debug!("struck out, {} outs", game.outs);
        }
        Some(Screens::Stat(StatScreen::default()))
    }

    fn draw_init(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>> {
        clear_panel(display)?;
        draw_title(display, "STRIKE")?;
        let (text, caption) = headline(game);
        draw_headline(display, text.as_str(), caption)
    }

    fn draw_frame(&mut self, _display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        Ok(())
    }
}

fn headline(game: &Game) -> (Label, Option<&'static str>) {
    if game.is_strikeout() {
        (format::text("Out!"), Some("3 Strikes"))
    } else {
        (format::count("Strike", game.strikes), None)
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for StrikeScreen<DT, E> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::testing::{NullPanel, TestScreens};
    use crate::ScreenKind;

    fn confirm(game: &mut Game) -> Option<ScreenKind> {
        let mut screen: StrikeScreen<NullPanel, Infallible> = StrikeScreen::default();
        let next: Option<TestScreens> = screen.on_button(game, Button::B.into());
        next.map(|s| s.kind())
    }

    #[test]
    fn test_strikeout_records_an_out() {
        let mut game = Game::default();
        game.strikes = 3;
        game.balls = 2;
        assert_eq!(confirm(&mut game), Some(ScreenKind::Stat));
        assert_eq!((game.outs, game.strikes, game.balls), (1, 0, 2));
    }

    #[test]
    fn test_plain_strike_returns_to_stat() {
        let mut game = Game::default();
        game.strikes = 2;
        assert_eq!(confirm(&mut game), Some(ScreenKind::Stat));
        assert_eq!((game.outs, game.strikes), (0, 2));
    }

    #[test]
    fn test_retired_side_goes_to_out_untouched() {
        let mut game = Game::default();
        game.outs = 3;
        game.strikes = 3;
        assert_eq!(confirm(&mut game), Some(ScreenKind::Out));
        assert_eq!((game.outs, game.strikes), (3, 3));
    }

    #[test]
    fn test_headline() {
        let mut game = Game::default();
        game.strikes = 1;
        let (text, caption) = headline(&game);
        assert_eq!((text.as_str(), caption), ("Strike 1!", None));

        game.strikes = 3;
        let (text, caption) = headline(&game);
        assert_eq!((text.as_str(), caption), ("Out!", Some("3 Strikes")));
    }
}
