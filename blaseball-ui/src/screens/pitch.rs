use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::rules::STARTING_PITCH;
use blaseball_core::{Button, Buttons, Game, Power};

use super::{adjust_power, clear_panel, BatScreen, Screen, Screens};
use crate::elements::{draw_counter, draw_title};
use crate::util::Tracked;
use crate::{AppDrawTarget, UiError};

pub struct PitchScreen<DT, E> {
    pitch: Power,
    drawn: Tracked<Power>,
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> PitchScreen<DT, E> {
    pub fn pitch(&self) -> Power {
        self.pitch
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for PitchScreen<DT, E> {
    fn on_button(&mut self, _game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::B) {
            return Some(Screens::Bat(BatScreen::new(self.pitch)));
        }
        adjust_power(&mut self.pitch, buttons);
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        self.drawn.invalidate();
        clear_panel(display)?;
        draw_title(display, "PITCH")
    }

    fn draw_frame(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        if self.drawn.update(self.pitch) {
            let center = display.bounding_box().center();
            draw_counter(display, center, self.pitch.value())?;
            display.hint_refresh();
        }
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for PitchScreen<DT, E> {
    fn default() -> Self {
        Self {
            pitch: Power::new(STARTING_PITCH),
            drawn: Tracked::new(),
            _phantom: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::testing::{NullPanel, TestScreens};

    #[test]
    fn test_pitch_carries_into_bat() {
        let mut game = Game::default();
        let mut screen: PitchScreen<NullPanel, Infallible> = PitchScreen::default();
        assert_eq!(screen.pitch().value(), STARTING_PITCH);

        screen.on_button(&mut game, Button::Up.into());
        screen.on_button(&mut game, Button::Up.into());
        screen.on_button(&mut game, Button::Down.into());

        let next: Option<TestScreens> = screen.on_button(&mut game, Button::B.into());
        match next {
            Some(Screens::Bat(bat)) => assert_eq!(bat.pitch().value(), STARTING_PITCH + 1),
            _ => panic!("expected the bat screen"),
        }
        assert_eq!(game, Game::default());
    }
}
