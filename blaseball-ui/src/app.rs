use core::fmt::Debug;

use blaseball_core::{Button, Buttons, Game};
use log::info;

use crate::assets::{self, AssetError};
use crate::screens::{Screen, ScreenKind, Screens, SplashScreen};
use crate::{AppDrawTarget, UiError};

/// Owns the game record and the screen currently in charge of it.
///
/// Call [`App::tick`] once per polling period with whatever buttons went down
/// since the last one.
pub struct App<DT: AppDrawTarget<E>, E: Debug> {
    screen: Screens<DT, E>,
    game: Game,
    fresh: bool,
}

impl<DT: AppDrawTarget<E>, E: Debug> App<DT, E> {
    pub fn new() -> Result<Self, AssetError> {
        assets::verify()?;
        Ok(Self {
            screen: Screens::Splash(SplashScreen::default()),
            game: Game::default(),
            fresh: true,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn screen(&self) -> &Screens<DT, E> {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Routes a button snapshot. Returns whether the active screen changed.
    pub fn on_buttons(&mut self, buttons: Buttons) -> bool {
        if buttons.is_empty() {
            return false;
        }

        let next = if buttons.is_pressed(Button::User) {
            Some(Screens::Splash(SplashScreen::default()))
        } else {
            self.screen.on_button(&mut self.game, buttons)
        };

        match next {
            Some(next) => {
                info!("{:?} -> {:?}", self.screen.kind(), next.kind());
                self.screen = next;
                self.fresh = true;
                true
            }
            None => false,
        }
    }

    pub fn render(&mut self, display: &mut DT) -> Result<(), UiError<E>> {
        if self.fresh {
            self.fresh = false;
            display.set_inverted(false);
            self.screen.draw_init(display, &self.game)?;
            display.hint_refresh();
        }
        self.screen.draw_frame(display, &self.game)
    }

    pub fn tick(&mut self, display: &mut DT, buttons: Buttons) -> Result<(), UiError<E>> {
        self.on_buttons(buttons);
        self.render(display)
    }
}
