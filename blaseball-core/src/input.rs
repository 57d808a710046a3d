//! Badge buttons and per-tick press snapshots.

/// Physical buttons on the badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    /// Left
    A,
    /// Confirm
    B,
    /// Right
    C,
    /// Home
    User,
}

impl Button {
    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Buttons pressed during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(u8);

impl Buttons {
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    pub fn press(&mut self, button: Button) {
        self.0 |= button.mask();
    }

    pub const fn is_pressed(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        Buttons::none().with(button)
    }
}
