use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Game, Power};
use embedded_graphics::geometry::{Dimensions, Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use super::{clear_panel, CatchScreen, RunsScreen, Screen, Screens};
use crate::elements::{clear_area, draw_title};
use crate::fonts::SMALL_FONT;
use crate::primitives::Underline;
use crate::util::Tracked;
use crate::{config, AppDrawTarget, UiError};

const UNDERLINE_OFFSET: i32 = 20;

/// Did the fielders get to the ball? Yes goes to the catch duel, No lets the
/// runners score.
pub struct AskCatchScreen<DT, E> {
    pitch: Power,
    bat: Power,
    caught: bool,
    drawn: Tracked<bool>,
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> AskCatchScreen<DT, E> {
    pub fn new(pitch: Power, bat: Power) -> Self {
        Self {
            pitch,
            bat,
            caught: true,
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

    pub fn caught(&self) -> bool {
        self.caught
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for AskCatchScreen<DT, E> {
    fn on_button(&mut self, _game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::A) {
            self.caught = !self.caught;
        } else if buttons.is_pressed(Button::B) {
            if !self.caught {
                return Some(Screens::Runs(RunsScreen::default()));
            }
            // Reaching the ball gives the batter one point of momentum.
            let mut bat = self.bat;
            bat.increment();
            return Some(Screens::Catch(CatchScreen::new(self.pitch, bat)));
        } else if buttons.is_pressed(Button::C) {
            self.caught = !self.caught;
        }
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        self.drawn.invalidate();
        clear_panel(display)?;
        draw_title(display, "CAUGHT?")?;

        let (yes, no) = option_centers(display);
        for (label, center) in [("Yes", yes), ("No", no)] {
            SMALL_FONT.render_aligned(
                label,
                center,
                VerticalPosition::Center,
                HorizontalAlignment::Center,
                FontColor::Transparent(config::COLOR_INK),
                display,
            )?;
        }
        Ok(())
    }

    fn draw_frame(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        if !self.drawn.update(self.caught) {
            return Ok(());
        }

        let (yes, no) = option_centers(display);
        let width = display.bounding_box().size.width;
        let strip = yes.y + UNDERLINE_OFFSET - config::UNDERLINE_THICKNESS as i32;
        clear_area(
            display,
            Rectangle::new(
                Point::new(0, strip),
                Size::new(width, config::UNDERLINE_THICKNESS * 3),
            ),
        )?;

        let selected = if self.caught { yes } else { no };
        Underline::centered(
            selected + Point::new(0, UNDERLINE_OFFSET),
            config::UNDERLINE_WIDTH,
            config::COLOR_INK,
        )
        .draw(display)
        .map_err(UiError::Display)?;

        display.hint_refresh();
        Ok(())
    }
}

fn option_centers(display: &impl Dimensions) -> (Point, Point) {
    let center = display.bounding_box().center();
    let quarter = display.bounding_box().size.width as i32 / 4;
    (
        center - Point::new(quarter, 0),
        center + Point::new(quarter, 0),
    )
}
