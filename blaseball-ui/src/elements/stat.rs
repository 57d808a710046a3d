use core::fmt::Debug;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::image::{Image, ImageDrawableExt};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use super::clear_area;
use crate::assets::STAT_ICONS;
use crate::fonts::SMALL_FONT;
use crate::format;
use crate::primitives::Underline;
use crate::{config as cfg, AppDrawTarget, UiError};

/// Icon and value for one of the ball/strike/out counters, underlined when
/// it is the one the up/down buttons adjust.
pub fn draw_stat<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    center: Point,
    icon: u32,
    value: u8,
    selected: bool,
) -> Result<(), UiError<E>> {
    let icon_size = cfg::STAT_ICON_SIZE as i32;
    let origin = center - Point::new(cfg::STAT_WIDTH as i32 / 2, icon_size / 2);
    clear_area(
        display,
        Rectangle::new(origin, Size::new(cfg::STAT_WIDTH, cfg::STAT_ICON_SIZE + 4)),
    )?;

    let sheet = STAT_ICONS.asset.image();
    let sprite = sheet.sub_image(&STAT_ICONS.icon_area(icon));
    Image::new(&sprite, origin)
        .draw(display)
        .map_err(UiError::Display)?;

    let value = format::number(value);
    SMALL_FONT.render_aligned(
        value.as_str(),
        origin + Point::new(icon_size + 16, icon_size / 2),
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::Transparent(cfg::COLOR_INK),
        display,
    )?;

    if selected {
        Underline::new(
            origin + Point::new(0, icon_size + 1),
            cfg::STAT_WIDTH,
            cfg::COLOR_INK,
        )
        .draw(display)
        .map_err(UiError::Display)?;
    }
    Ok(())
}
