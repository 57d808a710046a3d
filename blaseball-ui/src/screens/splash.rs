use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Game};
use embedded_graphics::geometry::Point;
use embedded_graphics::image::Image;
use embedded_graphics::Drawable;

use super::{clear_panel, Screen, Screens, SelectScreen};
use crate::assets::LOGO;
use crate::{AppDrawTarget, UiError};

pub struct SplashScreen<DT, E> {
    _phantom: PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for SplashScreen<DT, E> {
    fn on_button(&mut self, _game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::B) {
            return Some(Screens::Select(SelectScreen::default()));
        }
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        clear_panel(display)?;
        Image::new(&LOGO.image(), Point::zero())
            .draw(display)
            .map_err(UiError::Display)
    }

    fn draw_frame(&mut self, _display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for SplashScreen<DT, E> {
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

    #[test]
    fn test_only_confirm_leaves() {
        let mut game = Game::default();
        let mut screen: SplashScreen<NullPanel, Infallible> = SplashScreen::default();

        for button in [Button::Up, Button::Down, Button::A, Button::C] {
            assert!(screen.on_button(&mut game, button.into()).is_none());
        }
        let next: Option<TestScreens> = screen.on_button(&mut game, Button::B.into());
        assert_eq!(next.map(|s| s.kind()), Some(ScreenKind::Select));
    }
}
