use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::BinaryColor;

/// Badge e-paper panel, landscape.
pub const PANEL_SIZE: Size = Size::new(296, 128);

pub const COLOR_INK: BinaryColor = BinaryColor::On;
pub const COLOR_PAPER: BinaryColor = BinaryColor::Off;

pub const TITLE_HEIGHT: u32 = 30;
pub const SUBTITLE_HEIGHT: u32 = 30;
pub const TEAM_ROW_HEIGHT: u32 = 25;
pub const TEAM_NAME_LINE_HEIGHT: i32 = 15;

pub const STAT_ICON_SIZE: u32 = 32;
pub const STAT_WIDTH: u32 = STAT_ICON_SIZE + 32;
/// Vertical centre of the ball/strike/out row.
pub const STAT_ROW_CENTER_Y: i32 = 96;

pub const COUNTER_DIGIT_SIZE: Size = Size::new(20, 40);
pub const COUNTER_DIGIT_SPACING: u32 = 4;
pub const COUNTER_SEGMENT_WIDTH: u32 = 4;
/// Area cleared before a counter is redrawn. Wide enough for `u16::MAX`.
pub const COUNTER_CLEAR_SIZE: Size = Size::new(
    5 * COUNTER_DIGIT_SIZE.width + 4 * COUNTER_DIGIT_SPACING,
    48,
);

pub const UNDERLINE_WIDTH: u32 = 64;
pub const UNDERLINE_THICKNESS: u32 = 2;
