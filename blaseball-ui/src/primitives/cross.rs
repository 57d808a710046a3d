use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle, Styled};
use embedded_graphics::Drawable;

const STROKE_WIDTH: u32 = 3;

/// An X mark reaching `arm` pixels from `center` towards each corner.
pub struct Cross {
    strokes: [Styled<Line, PrimitiveStyle<BinaryColor>>; 2],
}

impl Cross {
    pub fn new(center: Point, arm: i32, color: BinaryColor) -> Self {
        let style = PrimitiveStyle::with_stroke(color, STROKE_WIDTH);
        let diagonal = |dx: i32| {
            Line::new(center + Point::new(-dx, -arm), center + Point::new(dx, arm))
                .into_styled(style)
        };

        Self {
            strokes: [diagonal(arm), diagonal(-arm)],
        }
    }
}

impl Drawable for Cross {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        for stroke in &self.strokes {
            stroke.draw(target)?;
        }
        Ok(())
    }
}
