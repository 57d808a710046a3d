/// A user-adjusted, non-negative counter (pitch, bat, catch or runs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Power(u16);

impl Power {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

impl From<Power> for u16 {
    fn from(power: Power) -> Self {
        power.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut power = Power::new(1);
        power.decrement();
        power.decrement();
        assert_eq!(power.value(), 0);
    }

    proptest! {
        #[test]
        fn test_never_negative_and_steps_by_one(
            start in 0u16..64,
            presses in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut power = Power::new(start);
            for up in presses {
                let before = power.value();
                if up {
                    power.increment();
                    prop_assert_eq!(power.value(), before + 1);
                } else {
                    power.decrement();
                    prop_assert_eq!(power.value(), before.saturating_sub(1));
                }
            }
        }
    }
}
