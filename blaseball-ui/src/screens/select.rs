use core::fmt::Debug;
use core::marker::PhantomData;

use blaseball_core::{Button, Buttons, Game, TeamSelection};
use embedded_graphics::geometry::Point;
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Drawable;
use log::info;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use super::{clear_panel, Screen, Screens, StatScreen};
use crate::assets::VERSUS;
use crate::fonts::TINIER_FONT;
use crate::util::Tracked;
use crate::{config, AppDrawTarget, UiError};

/// Both players pick a team. The panel is inverted while the second player
/// is choosing.
pub struct SelectScreen<DT, E> {
    selection: TeamSelection,
    drawn: Tracked<TeamSelection>,
    _phantom: PhantomData<(DT, E)>,
}

impl<DT, E> SelectScreen<DT, E> {
    pub fn selection(&self) -> TeamSelection {
        self.selection
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for SelectScreen<DT, E> {
    fn on_button(&mut self, game: &mut Game, buttons: Buttons) -> Option<Screens<DT, E>> {
        if buttons.is_pressed(Button::A) {
            self.selection.prev_player();
        } else if buttons.is_pressed(Button::B) {
            *game = Game::new(self.selection.team(0), self.selection.team(1));
            info!("new game: {}", game);
            return Some(Screens::Stat(StatScreen::default()));
        } else if buttons.is_pressed(Button::C) {
            self.selection.next_player();
        } else if buttons.is_pressed(Button::Up) {
            self.selection.next_team();
        } else if buttons.is_pressed(Button::Down) {
            self.selection.prev_team();
        }
        None
    }

    fn draw_init(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        self.drawn.invalidate();
        clear_panel(display)
    }

    fn draw_frame(&mut self, display: &mut DT, _game: &Game) -> Result<(), UiError<E>> {
        if !self.drawn.update(self.selection) {
            return Ok(());
        }

        display.set_inverted(self.selection.player() == 1);
        Image::new(&VERSUS.image(), Point::zero())
            .draw(display)
            .map_err(UiError::Display)?;

        let width = display.bounding_box().size.width as i32;
        // The left half of the backdrop is solid ink.
        draw_team_name(
            display,
            width / 4,
            self.selection.team(0),
            config::COLOR_PAPER,
        )?;
        draw_team_name(
            display,
            width * 3 / 4,
            self.selection.team(1),
            config::COLOR_INK,
        )?;

        display.hint_refresh();
        Ok(())
    }
}

/// Team name stacked one word per line, centred on column `x`.
fn draw_team_name<DT: AppDrawTarget<E>, E: Debug>(
    display: &mut DT,
    x: i32,
    name: &str,
    color: BinaryColor,
) -> Result<(), UiError<E>> {
    let line_height = config::TEAM_NAME_LINE_HEIGHT;
    let lines = name.split(' ').count() as i32;
    let mut y = display.bounding_box().center().y - (lines - 1) * line_height / 2;

    for word in name.split(' ') {
        TINIER_FONT.render_aligned(
            word,
            Point::new(x, y),
            VerticalPosition::Center,
            HorizontalAlignment::Center,
            FontColor::Transparent(color),
            display,
        )?;
        y += line_height;
    }
    Ok(())
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for SelectScreen<DT, E> {
    fn default() -> Self {
        Self {
            selection: TeamSelection::default(),
            drawn: Tracked::new(),
            _phantom: PhantomData,
        }
    }
}
