use core::fmt::Debug;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::TINY_FONT;
use crate::format;
use crate::{config as cfg, AppDrawTarget, UiError};

/// One full-width row: team name on the left, score on the right. A selected
/// row is drawn reversed.
pub fn draw_team_score<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    top: i32,
    name: &str,
    score: u16,
    selected: bool,
) -> Result<(), UiError<E>> {
    let width = display.bounding_box().size.width;
    let (fg, bg) = if selected {
        (cfg::COLOR_PAPER, cfg::COLOR_INK)
    } else {
        (cfg::COLOR_INK, cfg::COLOR_PAPER)
    };

    display
        .fill_solid(
            &Rectangle::new(Point::new(0, top), Size::new(width, cfg::TEAM_ROW_HEIGHT)),
            bg,
        )
        .map_err(UiError::Display)?;

    let middle = top + cfg::TEAM_ROW_HEIGHT as i32 / 2;
    TINY_FONT.render_aligned(
        name,
        Point::new(2, middle),
        VerticalPosition::Center,
        HorizontalAlignment::Left,
        FontColor::Transparent(fg),
        display,
    )?;

    let score = format::number(score);
    TINY_FONT.render_aligned(
        score.as_str(),
        Point::new(width as i32 - 3, middle),
        VerticalPosition::Center,
        HorizontalAlignment::Right,
        FontColor::Transparent(fg),
        display,
    )?;
    Ok(())
}
