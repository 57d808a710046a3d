use core::fmt::Debug;

use embedded_graphics::geometry::Point;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::{SMALL_FONT, TINY_FONT};
use crate::{config, AppDrawTarget, UiError};

/// Centred announcement ("Strike 2!"), optionally with a smaller caption
/// underneath ("3 Strikes").
pub fn draw_headline<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    headline: &str,
    caption: Option<&str>,
) -> Result<(), UiError<E>> {
    let center = display.bounding_box().center();
    let headline_center = if caption.is_some() {
        center - Point::new(0, 12)
    } else {
        center
    };

    SMALL_FONT.render_aligned(
        headline,
        headline_center,
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::Transparent(config::COLOR_INK),
        display,
    )?;

    if let Some(caption) = caption {
        TINY_FONT.render_aligned(
            caption,
            center + Point::new(0, 20),
            VerticalPosition::Center,
            HorizontalAlignment::Center,
            FontColor::Transparent(config::COLOR_INK),
            display,
        )?;
    }
    Ok(())
}
