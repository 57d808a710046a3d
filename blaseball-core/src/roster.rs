/// Teams available at the select screen.
pub const TEAMS: [&str; 2] = ["THE CANIS UNDERDOGS", "THE AURIC ALLSTARS"];

/// Team choice for both players while on the select screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TeamSelection {
    player: usize,
    teams: [usize; 2],
}

impl TeamSelection {
    /// Player being edited, 0 or 1.
    pub fn player(&self) -> usize {
        self.player
    }

    /// Roster index chosen by `player`.
    pub fn team_index(&self, player: usize) -> usize {
        self.teams[player % 2]
    }

    pub fn team(&self, player: usize) -> &'static str {
        TEAMS[self.team_index(player)]
    }

    pub fn next_player(&mut self) {
        self.player = (self.player + 1) % 2;
    }

    pub fn prev_player(&mut self) {
        self.player = (self.player + 1) % 2;
    }

    pub fn next_team(&mut self) {
        let team = &mut self.teams[self.player];
        *team = (*team + 1) % TEAMS.len();
    }

    pub fn prev_team(&mut self) {
        let team = &mut self.teams[self.player];
        *team = (*team + TEAMS.len() - 1) % TEAMS.len();
    }
}

impl Default for TeamSelection {
    fn default() -> Self {
        Self {
            player: 0,
            teams: [0, 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_distinct_teams() {
        let selection = TeamSelection::default();
        assert_eq!(selection.player(), 0);
        assert_eq!(selection.team(0), "THE CANIS UNDERDOGS");
        assert_eq!(selection.team(1), "THE AURIC ALLSTARS");
    }

    #[test]
    fn test_cycles_only_the_active_player() {
        let mut selection = TeamSelection::default();
        selection.next_player();
        assert_eq!(selection.player(), 1);
        selection.next_team();
        assert_eq!(selection.team_index(1), 0);
        assert_eq!(selection.team_index(0), 0);

        selection.prev_team();
        assert_eq!(selection.team_index(1), 1);
        selection.prev_team();
        assert_eq!(selection.team_index(1), 0);
    }

    #[test]
    fn test_player_toggle_wraps_both_ways() {
        let mut selection = TeamSelection::default();
        selection.prev_player();
        assert_eq!(selection.player(), 1);
        selection.prev_player();
        assert_eq!(selection.player(), 0);
        selection.next_player();
        selection.next_player();
        assert_eq!(selection.player(), 0);
    }
}
