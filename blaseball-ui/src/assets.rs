//! Images bundled into the firmware.
//!
//! Each asset is a raw 1-bit bitmap: rows top to bottom, most significant bit
//! leftmost, every row padded to a whole byte, set bits are ink.

use core::fmt;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// Bundled data does not match the declared dimensions
    SizeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::SizeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "asset {} is {} bytes, expected {}",
                name, actual, expected
            ),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RawAsset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    data: &'static [u8],
}

impl RawAsset {
    pub const fn new(name: &'static str, data: &'static [u8], width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
            data,
        }
    }

    pub const fn expected_len(&self) -> usize {
        (self.width as usize).div_ceil(8) * self.height as usize
    }

    pub fn verify(&self) -> Result<(), AssetError> {
        if self.data.len() != self.expected_len() {
            return Err(AssetError::SizeMismatch {
                name: self.name,
                expected: self.expected_len(),
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn image(&self) -> ImageRaw<'static, BinaryColor> {
        ImageRaw::new(self.data, self.width)
    }
}

/// A horizontal strip of equally sized square icons.
#[derive(Clone, Copy, Debug)]
pub struct IconSheet {
    pub asset: RawAsset,
    pub icon_size: u32,
}

impl IconSheet {
    /// Area of icon `index` within the sheet.
    pub fn icon_area(&self, index: u32) -> Rectangle {
        Rectangle::new(
            Point::new((index * self.icon_size) as i32, 0),
            Size::new(self.icon_size, self.icon_size),
        )
    }
}

pub const LOGO: RawAsset = RawAsset::new("logo", include_bytes!("../assets/logo.bin"), 296, 128);

/// Select screen backdrop, ink on the left half.
pub const VERSUS: RawAsset = RawAsset::new("vs", include_bytes!("../assets/vs.bin"), 296, 128);

/// Ball, strike and out icons, in `Counter` order.
pub const STAT_ICONS: IconSheet = IconSheet {
    asset: RawAsset::new("stats", include_bytes!("../assets/stats.bin"), 96, 32),
    icon_size: 32,
};

/// Checks every bundled asset. Run once at boot.
pub fn verify() -> Result<(), AssetError> {
    LOGO.verify()?;
    VERSUS.verify()?;
    STAT_ICONS.asset.verify()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_assets_match_their_sizes() {
        assert_eq!(verify(), Ok(()));
        assert_eq!(LOGO.expected_len(), 37 * 128);
        assert_eq!(STAT_ICONS.asset.width, 3 * STAT_ICONS.icon_size);
    }

    #[test]
    fn test_truncated_asset_is_rejected() {
        let asset = RawAsset::new("short", &[0u8; 10], 16, 8);
        assert_eq!(
            asset.verify(),
            Err(AssetError::SizeMismatch {
                name: "short",
                expected: 16,
                actual: 10,
            })
        );
    }

    #[test]
    fn test_icon_areas_tile_the_sheet() {
        assert_eq!(
            STAT_ICONS.icon_area(2),
            Rectangle::new(Point::new(64, 0), Size::new(32, 32))
        );
    }
}
