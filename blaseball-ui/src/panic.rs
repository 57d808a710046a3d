use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;
use embedded_text::style::{HeightMode, TextBoxStyleBuilder};
use embedded_text::TextBox;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};
use u8g2_fonts::U8g2TextStyle;

use crate::config::{COLOR_INK, COLOR_PAPER};
use crate::fonts::{TinierFont, SMALL_FONT, TINY_FONT};
use crate::primitives::Cross;
use crate::AppDrawTarget;

/// Last-resort notice. Nothing here can fail louder than the error being
/// reported, so draw errors are dropped.
pub fn draw_panic_screen<D: AppDrawTarget<E>, E>(display: &mut D, message: &str) {
    let width = display.bounding_box().size.width;
    let height = display.bounding_box().size.height;

    display.set_inverted(false);
    let _ = display.fill_solid(&display.bounding_box(), COLOR_PAPER);

    for d in [-1, 1] {
        let _ = Cross::new(Point::new(width as i32 / 2 + d * 110, 22), 10, COLOR_INK).draw(display);
    }

    let _ = SMALL_FONT.render_aligned(
        " FATAL ERROR ",
        Point::new(width as i32 / 2, 6),
        VerticalPosition::Top,
        HorizontalAlignment::Center,
        FontColor::WithBackground {
            fg: COLOR_PAPER,
            bg: COLOR_INK,
        },
        display,
    );

    let _ = TINY_FONT.render_aligned(
        env!("CARGO_PKG_VERSION"),
        Point::new(width as i32 / 2, 40),
        VerticalPosition::Top,
        HorizontalAlignment::Center,
        FontColor::Transparent(COLOR_INK),
        display,
    );

    let character_style = U8g2TextStyle::new(TinierFont {}, COLOR_INK);

    let textbox_style = TextBoxStyleBuilder::new()
        .height_mode(HeightMode::FitToText)
        .alignment(embedded_text::alignment::HorizontalAlignment::Center)
        .build();

    let origin = Point::new(6, 62);
    let _ = TextBox::with_textbox_style(
        message,
        Rectangle::new(origin, Size::new(width - 12, height - origin.y as u32)),
        character_style,
        textbox_style,
    )
    .draw(display);

    display.hint_refresh();
}
