//! Draw targets for exercising screens without hardware.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

use crate::screens::Screens;
use crate::{config, HintRefresh, InvertColors};

pub type TestScreens = Screens<NullPanel, Infallible>;

/// A panel-sized target that discards everything.
pub struct NullPanel;

impl OriginDimensions for NullPanel {
    fn size(&self) -> Size {
        config::PANEL_SIZE
    }
}

impl DrawTarget for NullPanel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Pulled so wrapping panels see every pixel.
        pixels.into_iter().for_each(drop);
        Ok(())
    }
}

impl HintRefresh for NullPanel {
    fn hint_refresh(&mut self) {}
}

impl InvertColors for NullPanel {
    fn set_inverted(&mut self, _inverted: bool) {}
}

/// Wraps a draw target and records what the app asked of the panel.
pub struct TestPanel<D> {
    pub target: D,
    pub inverted: bool,
    pub refreshes: usize,
    /// Ink pixels drawn so far, overdraw included.
    pub ink: usize,
}

impl<D> TestPanel<D> {
    pub fn new(target: D) -> Self {
        Self {
            target,
            inverted: false,
            refreshes: 0,
            ink: 0,
        }
    }
}

impl<D: Dimensions> Dimensions for TestPanel<D> {
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D: DrawTarget<Color = BinaryColor>> DrawTarget for TestPanel<D> {
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let ink = &mut self.ink;
        self.target.draw_iter(pixels.into_iter().inspect(|&Pixel(_, color)| {
            if color.is_on() {
                *ink += 1;
            }
        }))
    }
}

impl<D> HintRefresh for TestPanel<D> {
    fn hint_refresh(&mut self) {
        self.refreshes += 1;
    }
}

impl<D> InvertColors for TestPanel<D> {
    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Point;
    use embedded_graphics::primitives::Rectangle;

    use super::*;

    #[test]
    fn test_panel_counts_ink_through_null_target() {
        let mut panel = TestPanel::new(NullPanel);
        let area = Rectangle::new(Point::zero(), Size::new(4, 3));
        panel.fill_solid(&area, BinaryColor::On).unwrap();
        panel.fill_solid(&area, BinaryColor::Off).unwrap();
        assert_eq!(panel.ink, 12);
    }
}
