use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle, Styled};
use embedded_graphics::Drawable;

use crate::config;

/// Selection marker drawn under a widget.
pub struct Underline {
    line: Styled<Line, PrimitiveStyle<BinaryColor>>,
}

impl Underline {
    /// A marker `width` pixels long whose left end sits at `start`.
    pub fn new(start: Point, width: u32, color: BinaryColor) -> Self {
        let style = PrimitiveStyle::with_stroke(color, config::UNDERLINE_THICKNESS);
        Self {
            line: Line::new(start, start + Point::new(width as i32, 0)).into_styled(style),
        }
    }

    /// A marker centred horizontally on `center`.
    pub fn centered(center: Point, width: u32, color: BinaryColor) -> Self {
        Self::new(center - Point::new(width as i32 / 2, 0), width, color)
    }
}

impl Drawable for Underline {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.line.draw(target)
    }
}
