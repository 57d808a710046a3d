use core::fmt::Debug;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use super::clear_area;
use crate::fonts::SMALL_FONT;
use crate::{config, AppDrawTarget, UiError};

pub fn draw_badge<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    point: Point,
    text: &str,
    fg: BinaryColor,
    bg: BinaryColor,
) -> Result<(), UiError<E>> {
    SMALL_FONT.render_aligned(
        text,
        point,
        VerticalPosition::Top,
        HorizontalAlignment::Center,
        FontColor::WithBackground { fg, bg },
        display,
    )?;
    Ok(())
}

/// Screen name across the top of the panel.
pub fn draw_title<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    text: &str,
) -> Result<(), UiError<E>> {
    let bounds = display.bounding_box();
    clear_area(
        display,
        Rectangle::new(
            Point::zero(),
            Size::new(bounds.size.width, config::TITLE_HEIGHT),
        ),
    )?;
    draw_badge(
        display,
        Point::new(bounds.center().x, 0),
        text,
        config::COLOR_INK,
        config::COLOR_PAPER,
    )
}
