//! Outcome rules for a pitch, a swing and a catch.

use crate::rules::HOMERUN_BASE;

/// What a swing amounts to before the fielders get involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwingOutcome {
    /// Bat fell short of the pitch
    Strike,
    /// Bat exactly matched the pitch
    Ball,
    /// Ball is in play, reaching `base`
    Hit { base: i32 },
}

/// How far a hit travels: bat power minus pitch power.
pub fn base(pitch: u16, bat: u16) -> i32 {
    i32::from(bat) - i32::from(pitch)
}

pub fn is_homerun(base: i32) -> bool {
    base >= HOMERUN_BASE
}

pub fn swing(pitch: u16, bat: u16) -> SwingOutcome {
    match base(pitch, bat) {
        b if b < 0 => SwingOutcome::Strike,
        0 => SwingOutcome::Ball,
        b => SwingOutcome::Hit { base: b },
    }
}

/// The fielder gets the batter out when the catch beats the bat.
pub fn is_caught_out(bat: u16, catch: u16) -> bool {
    i32::from(bat) - i32::from(catch) < 0
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(swing(10, 9), SwingOutcome::Strike);
        assert_eq!(swing(10, 10), SwingOutcome::Ball);
        assert_eq!(swing(10, 14), SwingOutcome::Hit { base: 4 });
        assert!(is_homerun(base(10, 14)));
        assert!(!is_homerun(base(10, 13)));
    }

    #[test]
    fn test_catch_must_beat_bat() {
        assert!(is_caught_out(11, 12));
        assert!(!is_caught_out(11, 11));
        assert!(!is_caught_out(11, 0));
    }

    proptest! {
        #[test]
        fn test_swing_follows_sign_of_base(pitch in 0u16..1000, bat in 0u16..1000) {
            let b = base(pitch, bat);
            prop_assert_eq!(b, bat as i32 - pitch as i32);
            match swing(pitch, bat) {
                SwingOutcome::Strike => prop_assert!(b < 0),
                SwingOutcome::Ball => prop_assert_eq!(b, 0),
                SwingOutcome::Hit { base } => {
                    prop_assert!(base > 0);
                    prop_assert_eq!(base, b);
                }
            }
        }
    }
}
