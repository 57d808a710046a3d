use core::fmt::Debug;

use eg_seven_segment::SevenSegmentStyleBuilder;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};
use u8g2_fonts::FontRenderer;

use super::clear_area;
use crate::fonts::{SMALL_FONT, TINY_FONT};
use crate::format;
use crate::{config as cfg, AppDrawTarget, UiError};

/// Large seven-segment number centred on `center`, replacing whatever was
/// there before.
pub fn draw_counter<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    center: Point,
    value: u16,
) -> Result<(), UiError<E>> {
    clear_area(display, Rectangle::with_center(center, cfg::COUNTER_CLEAR_SIZE))?;

    let style = SevenSegmentStyleBuilder::new()
        .digit_size(cfg::COUNTER_DIGIT_SIZE)
        .digit_spacing(cfg::COUNTER_DIGIT_SPACING)
        .segment_width(cfg::COUNTER_SEGMENT_WIDTH)
        .segment_color(cfg::COLOR_INK)
        .build();
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    let label = format::number(value);
    Text::with_text_style(label.as_str(), center, style, text_style)
        .draw(display)
        .map_err(UiError::Display)?;
    Ok(())
}

/// The "VS" between two counters.
pub fn draw_versus<D: AppDrawTarget<E>, E: Debug>(display: &mut D) -> Result<(), UiError<E>> {
    let center = display.bounding_box().center();
    SMALL_FONT.render_aligned(
        "VS",
        center,
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::Transparent(cfg::COLOR_INK),
        display,
    )?;
    Ok(())
}

/// Outcome line along the bottom edge.
pub fn draw_subtitle<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    text: &str,
) -> Result<(), UiError<E>> {
    draw_bottom_line(display, text, &SMALL_FONT)
}

/// Smaller bottom line, for text too long for a subtitle.
pub fn draw_footer<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    text: &str,
) -> Result<(), UiError<E>> {
    draw_bottom_line(display, text, &TINY_FONT)
}

fn draw_bottom_line<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    text: &str,
    font: &FontRenderer,
) -> Result<(), UiError<E>> {
    let bounds = display.bounding_box();
    let top = (bounds.size.height - cfg::SUBTITLE_HEIGHT) as i32;
    clear_area(
        display,
        Rectangle::new(
            Point::new(0, top),
            Size::new(bounds.size.width, cfg::SUBTITLE_HEIGHT),
        ),
    )?;

    font.render_aligned(
        text,
        Point::new(bounds.center().x, top + cfg::SUBTITLE_HEIGHT as i32 / 2),
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::Transparent(cfg::COLOR_INK),
        display,
    )?;
    Ok(())
}
