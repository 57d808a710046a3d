use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Game, Inning};
use log::info;

use super::{clear_panel, Screen, Screens, ScoreScreen, StatScreen};
use crate::elements::{draw_headline, draw_title};
use crate::format::{self, Label};
use crate::{AppDrawTarget, UiError};

/// Announces an out. Three of them switch sides, or end the game after the
/// bottom half.
pub struct OutScreen<DT, E> {
    _phantom: PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for OutScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if !buttons.is_pressed(Button::B) {
            return None;
        }
        if !game.is_side_retired() {
            return Some(Screens::Stat(StatScreen::default()));
        }

        let over = game.inning == Inning::Bottom;
        game.next_half();
        info!("side retired: {}", game);
        if over {
            Some(Screens::Score(ScoreScreen::default()))
        } else {
            Some(Screens::Stat(StatScreen::default()))
        }
    }

    fn draw_init(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>> {
        clear_panel(display)?;
        draw_title(display, "OUT")?;
        let (text, caption) = headline(game);
        draw_headline(display, text.as_str(), caption)
    }

    fn draw_frame(&mut self, _display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        Ok(())
    }
}

fn headline(game: &Game) -> (Label, Option<&'static str>) {
    match (game.is_side_retired(), game.inning) {
        (true, Inning::Bottom) => (format::text("Game Over!"), Some("3 Outs")),
        (true, _) => (format::text("Switch!"), Some("3 Outs")),
        (false, _) => (format::count("Out", game.outs), None),
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for OutScreen<DT, E> {
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
        let mut screen: OutScreen<NullPanel, Infallible> = OutScreen::default();
        let next: Option<TestScreens> = screen.on_button(game, Button::B.into());
        next.map(|s| s.kind())
    }

    #[test]
    fn test_single_out_returns_to_stat() {
        let mut game = Game::default();
        game.outs = 1;
        assert_eq!(confirm(&mut game), Some(ScreenKind::Stat));
        assert_eq!((game.outs, game.inning), (1, Inning::Top));
    }

    #[test]
    fn test_three_outs_switch_sides() {
        let mut game = Game::default();
        game.outs = 3;
        game.strikes = 1;
        game.balls = 2;
        assert_eq!(confirm(&mut game), Some(ScreenKind::Stat));
        assert_eq!(game.inning, Inning::Bottom);
        assert_eq!((game.outs, game.strikes, game.balls), (0, 0, 0));
    }

    #[test]
    fn test_three_outs_in_bottom_end_the_game() {
        let mut game = Game::default();
        game.inning = Inning::Bottom;
        game.score1 = 2;
        game.score2 = 5;
        game.outs = 3;
        assert_eq!(confirm(&mut game), Some(ScreenKind::Score));
        assert!(game.is_over());
        assert_eq!((game.score1, game.score2), (2, 5));
        assert_eq!((game.outs, game.strikes, game.balls), (0, 0, 0));
    }

    #[test]
    fn test_headline() {
        let mut game = Game::default();
        game.outs = 2;
        let (text, caption) = headline(&game);
        assert_eq!((text.as_str(), caption), ("Out 2!", None));

        game.outs = 3;
        let (text, caption) = headline(&game);
        assert_eq!((text.as_str(), caption), ("Switch!", Some("3 Outs")));

        game.inning = Inning::Bottom;
        let (text, caption) = headline(&game);
        assert_eq!((text.as_str(), caption), ("Game Over!", Some("3 Outs")));
    }
}
