use core::fmt;

use log::debug;

use crate::roster::TEAMS;
use crate::rules::{BALLS_PER_WALK, OUTS_PER_HALF, STRIKES_PER_OUT};

/// Which half of the (single) inning is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Inning {
    /// Team 1 bats
    Top,
    /// Team 2 bats
    Bottom,
    /// Game finished
    Over,
}

impl Inning {
    /// The following half. `Over` is terminal.
    pub fn next(self) -> Self {
        match self {
            Inning::Top => Inning::Bottom,
            Inning::Bottom | Inning::Over => Inning::Over,
        }
    }

    /// Index of the batting team, if any.
    pub fn batting(self) -> Option<usize> {
        match self {
            Inning::Top => Some(0),
            Inning::Bottom => Some(1),
            Inning::Over => None,
        }
    }
}

/// The ball/strike/out counters shown on the stat screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Counter {
    Balls,
    Strikes,
    Outs,
}

impl Counter {
    pub const ALL: [Counter; 3] = [Counter::Balls, Counter::Strikes, Counter::Outs];

    pub fn index(self) -> usize {
        match self {
            Counter::Balls => 0,
            Counter::Strikes => 1,
            Counter::Outs => 2,
        }
    }

    /// Next counter to the right, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next counter to the left, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Value at which the counter ends the at-bat (or the half).
    pub fn threshold(self) -> u8 {
        match self {
            Counter::Balls => BALLS_PER_WALK,
            Counter::Strikes => STRIKES_PER_OUT,
            Counter::Outs => OUTS_PER_HALF,
        }
    }
}

/// The shared game record.
///
/// Counters may briefly exceed their thresholds; the screen that pushed them
/// over is responsible for wrapping or resetting them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Game {
    pub team1: &'static str,
    pub team2: &'static str,
    pub inning: Inning,
    pub score1: u16,
    pub score2: u16,
    pub outs: u8,
    pub strikes: u8,
    pub balls: u8,
}

impl Game {
    pub fn new(team1: &'static str, team2: &'static str) -> Self {
        Self {
            team1,
            team2,
            inning: Inning::Top,
            score1: 0,
            score2: 0,
            outs: 0,
            strikes: 0,
            balls: 0,
        }
    }

    pub fn team(&self, index: usize) -> &'static str {
        if index == 0 {
            self.team1
        } else {
            self.team2
        }
    }

    pub fn score(&self, index: usize) -> u16 {
        if index == 0 {
            self.score1
        } else {
            self.score2
        }
    }

    pub fn batting_team(&self) -> Option<&'static str> {
        self.inning.batting().map(|index| self.team(index))
    }

    pub fn batting_score_mut(&mut self) -> Option<&mut u16> {
        match self.inning {
            Inning::Top => Some(&mut self.score1),
            Inning::Bottom => Some(&mut self.score2),
            Inning::Over => None,
        }
    }

    /// Credits runs to whoever is batting. Nobody bats once the game is over.
    pub fn add_runs(&mut self, runs: u16) {
        let inning = self.inning;
        if let Some(score) = self.batting_score_mut() {
            *score = score.saturating_add(runs);
            debug!("{} runs scored in {:?}, now {}", runs, inning, *score);
        }
    }

    pub fn counter(&self, counter: Counter) -> u8 {
        match counter {
            Counter::Balls => self.balls,
            Counter::Strikes => self.strikes,
            Counter::Outs => self.outs,
        }
    }

    fn counter_mut(&mut self, counter: Counter) -> &mut u8 {
        match counter {
            Counter::Balls => &mut self.balls,
            Counter::Strikes => &mut self.strikes,
            Counter::Outs => &mut self.outs,
        }
    }

    /// Adds one to `counter`, returning whether it reached its threshold.
    pub fn increment(&mut self, counter: Counter) -> bool {
        let value = self.counter_mut(counter);
        *value = value.saturating_add(1);
        *value >= counter.threshold()
    }

    /// Takes one from `counter`, stopping at zero.
    pub fn decrement(&mut self, counter: Counter) {
        let value = self.counter_mut(counter);
        *value = value.saturating_sub(1);
    }

    /// Starts a fresh count for the next batter.
    pub fn clear_count(&mut self) {
        self.strikes = 0;
        self.balls = 0;
    }

    /// Moves to the next half inning with a clean slate.
    pub fn next_half(&mut self) {
        self.inning = self.inning.next();
        self.outs = 0;
        self.clear_count();
        debug!("inning advanced to {:?}", self.inning);
    }

    pub fn is_walk(&self) -> bool {
        self.balls >= BALLS_PER_WALK
    }

    pub fn is_strikeout(&self) -> bool {
        self.strikes >= STRIKES_PER_OUT
    }

    pub fn is_side_retired(&self) -> bool {
        self.outs >= OUTS_PER_HALF
    }

    pub fn is_over(&self) -> bool {
        self.inning == Inning::Over
    }

    /// Index of the team with the strictly higher score.
    pub fn winner(&self) -> Option<usize> {
        match self.score1.cmp(&self.score2) {
            core::cmp::Ordering::Greater => Some(0),
            core::cmp::Ordering::Less => Some(1),
            core::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(TEAMS[0], TEAMS[1])
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} ({:?}, {}B {}S {}O)",
            self.team1,
            self.score1,
            self.score2,
            self.team2,
            self.inning,
            self.balls,
            self.strikes,
            self.outs
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use alloc::string::ToString;

    use super::*;

    fn game() -> Game {
        Game::new("HOME", "AWAY")
    }

    #[test]
    fn test_new_game_is_blank() {
        let game = game();
        assert_eq!(game.inning, Inning::Top);
        assert_eq!((game.score1, game.score2), (0, 0));
        assert_eq!((game.balls, game.strikes, game.outs), (0, 0, 0));
        assert_eq!(game.batting_team(), Some("HOME"));
    }

    #[test]
    fn test_inning_only_moves_forward() {
        assert_eq!(Inning::Top.next(), Inning::Bottom);
        assert_eq!(Inning::Bottom.next(), Inning::Over);
        assert_eq!(Inning::Over.next(), Inning::Over);
        assert!(Inning::Top < Inning::Bottom && Inning::Bottom < Inning::Over);
    }

    #[test]
    fn test_runs_go_to_batting_team() {
        let mut game = game();
        game.add_runs(2);
        assert_eq!((game.score1, game.score2), (2, 0));

        game.next_half();
        game.add_runs(3);
        assert_eq!((game.score1, game.score2), (2, 3));

        game.next_half();
        game.add_runs(5);
        assert_eq!((game.score1, game.score2), (2, 3));
    }

    #[test]
    fn test_next_half_resets_counters() {
        let mut game = game();
        game.outs = 3;
        game.strikes = 2;
        game.balls = 1;
        game.next_half();
        assert_eq!(game.inning, Inning::Bottom);
        assert_eq!((game.balls, game.strikes, game.outs), (0, 0, 0));
        assert_eq!(game.batting_team(), Some("AWAY"));
    }

    #[test]
    fn test_increment_reports_threshold() {
        let mut game = game();
        assert!(!game.increment(Counter::Balls));
        assert!(!game.increment(Counter::Balls));
        assert!(!game.increment(Counter::Balls));
        assert!(game.increment(Counter::Balls));
        assert!(game.is_walk());

        assert!(!game.increment(Counter::Strikes));
        assert!(!game.increment(Counter::Strikes));
        assert!(game.increment(Counter::Strikes));
        assert!(game.is_strikeout());

        game.outs = 2;
        assert!(game.increment(Counter::Outs));
        assert!(game.is_side_retired());
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut game = game();
        game.decrement(Counter::Outs);
        assert_eq!(game.outs, 0);
        game.strikes = 2;
        game.decrement(Counter::Strikes);
        assert_eq!(game.strikes, 1);
    }

    #[test]
    fn test_counter_selection_wraps() {
        assert_eq!(Counter::Balls.prev(), Counter::Outs);
        assert_eq!(Counter::Outs.next(), Counter::Balls);
        assert_eq!(Counter::Balls.next(), Counter::Strikes);
        assert_eq!(Counter::Strikes.prev(), Counter::Balls);
    }

    #[test]
    fn test_winner() {
        let mut game = game();
        assert_eq!(game.winner(), None);
        game.score2 = 1;
        assert_eq!(game.winner(), Some(1));
        game.score1 = 4;
        assert_eq!(game.winner(), Some(0));
    }

    #[test]
    fn test_display_summarises_the_game() {
        let mut game = game();
        game.add_runs(2);
        game.balls = 1;
        game.outs = 2;
        assert_eq!(game.to_string(), "HOME 2 - 0 AWAY (Top, 1B 0S 2O)");
    }
}
