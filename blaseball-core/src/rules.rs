//! Game constants.

/// Strikes that make an out.
pub const STRIKES_PER_OUT: u8 = 3;
/// Balls that make a walk.
pub const BALLS_PER_WALK: u8 = 4;
/// Outs that retire the side.
pub const OUTS_PER_HALF: u8 = 3;

/// A base at or beyond this is a homerun.
pub const HOMERUN_BASE: i32 = 4;

pub const STARTING_PITCH: u16 = 10;
pub const STARTING_BAT: u16 = 10;
pub const STARTING_CATCH: u16 = 10;
pub const STARTING_RUNS: u16 = 0;
