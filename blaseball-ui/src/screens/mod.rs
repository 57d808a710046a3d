mod ask_catch;
mod ball;
mod bat;
mod catch;
mod out;
mod pitch;
mod runs;
mod score;
mod select;
mod splash;
mod stat;
mod strike;

use core::fmt::Debug;

pub use ask_catch::AskCatchScreen;
pub use ball::BallScreen;
pub use bat::BatScreen;
use blaseball_core::{Button, Buttons, Game, Power};
pub use catch::CatchScreen;
use enum_dispatch::enum_dispatch;
pub use out::OutScreen;
pub use pitch::PitchScreen;
pub use runs::RunsScreen;
pub use score::ScoreScreen;
pub use select::SelectScreen;
pub use splash::SplashScreen;
pub use stat::StatScreen;
pub use strike::StrikeScreen;

use crate::{config, AppDrawTarget, UiError};

/// One step of the game flow.
///
/// `on_button` sees every tick's snapshot and may hand back the screen to
/// switch to. Drawing is split so that `draw_init` lays out everything static
/// once, and `draw_frame` only touches what changed since it last ran.
#[enum_dispatch(Screens<DT, E>)]
pub trait Screen<DT: AppDrawTarget<E>, E: Debug> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>>;
    fn draw_init(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>>;
    fn draw_frame(&mut self, display: &mut DT, game: &Game) -> Result<(), UiError<E>>;
}

#[enum_dispatch]
pub enum Screens<DT: AppDrawTarget<E>, E: Debug> {
    Splash(SplashScreen<DT, E>),
    Select(SelectScreen<DT, E>),
    Stat(StatScreen<DT, E>),
    Pitch(PitchScreen<DT, E>),
    Bat(BatScreen<DT, E>),
    AskCatch(AskCatchScreen<DT, E>),
    Catch(CatchScreen<DT, E>),
    Ball(BallScreen<DT, E>),
    Strike(StrikeScreen<DT, E>),
    Out(OutScreen<DT, E>),
    Runs(RunsScreen<DT, E>),
    Score(ScoreScreen<DT, E>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    Splash,
    Select,
    Stat,
    Pitch,
    Bat,
    AskCatch,
    Catch,
    Ball,
    Strike,
    Out,
    Runs,
    Score,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screens<DT, E> {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screens::Splash(_) => ScreenKind::Splash,
            Screens::Select(_) => ScreenKind::Select,
            Screens::Stat(_) => ScreenKind::Stat,
            Screens::Pitch(_) => ScreenKind::Pitch,
            Screens::Bat(_) => ScreenKind::Bat,
            Screens::AskCatch(_) => ScreenKind::AskCatch,
            Screens::Catch(_) => ScreenKind::Catch,
            Screens::Ball(_) => ScreenKind::Ball,
            Screens::Strike(_) => ScreenKind::Strike,
            Screens::Out(_) => ScreenKind::Out,
            Screens::Runs(_) => ScreenKind::Runs,
            Screens::Score(_) => ScreenKind::Score,
        }
    }
}

/// UP/DOWN handling shared by the power screens.
fn adjust_power(power: &mut Power, buttons: Buttons) {
    if buttons.is_pressed(Button::Up) {
        power.increment();
    } else if buttons.is_pressed(Button::Down) {
        power.decrement();
    }
}

fn clear_panel<DT: AppDrawTarget<E>, E: Debug>(display: &mut DT) -> Result<(), UiError<E>> {
    display
        .clear(config::COLOR_PAPER)
        .map_err(UiError::Display)
}
