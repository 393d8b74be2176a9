// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bracket::{Bracket, BracketPhase, bracket_phase};
use ladder_cup_domain::{
    LeagueReadiness, Match, MatchId, PlayerName, Roster, Standing, calculate_standings,
    evaluate_league_readiness,
};

/// Rounds in the default league template.
pub const LEAGUE_ROUNDS: u32 = 3;
/// Fixtures per round in the default league template.
pub const MATCHES_PER_ROUND: u32 = 2;

/// The complete state of one event.
///
/// Passed by reference into every transition; a transition returns a new
/// state and never mutates its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventState {
    /// The players.
    pub roster: Roster,
    /// League fixtures.
    pub league_matches: Vec<Match>,
    /// Knockout matches.
    pub bracket: Bracket,
    /// Crowned champion, if any.
    pub champion: Option<PlayerName>,
    /// Whether the league has been finalized.
    pub league_locked: bool,
}

impl EventState {
    /// Creates a new event with the default league template.
    ///
    /// The template is `L1`..`L6`: two empty fixtures in each of three
    /// rounds. The bracket starts unseeded.
    ///
    /// # Arguments
    ///
    /// * `roster` - The players taking part
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        let league_matches: Vec<Match> = (0..LEAGUE_ROUNDS * MATCHES_PER_ROUND)
            .map(|i| Match::league(&format!("L{}", i + 1), i / MATCHES_PER_ROUND + 1))
            .collect();

        Self {
            roster,
            league_matches,
            bracket: Bracket::unseeded(),
            champion: None,
            league_locked: false,
        }
    }

    /// The current league table.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        calculate_standings(&self.roster, &self.league_matches)
    }

    /// Whether the league could be finalized now.
    #[must_use]
    pub fn league_readiness(&self) -> LeagueReadiness {
        evaluate_league_readiness(&self.league_matches)
    }

    /// Where the event stands in the stepladder.
    #[must_use]
    pub const fn bracket_phase(&self) -> BracketPhase {
        bracket_phase(self)
    }

    /// The league fixture with this id.
    #[must_use]
    pub fn league_match(&self, match_id: &MatchId) -> Option<&Match> {
        self.league_matches.iter().find(|m| &m.id == match_id)
    }

    pub(crate) fn league_match_mut(&mut self, match_id: &MatchId) -> Option<&mut Match> {
        self.league_matches.iter_mut().find(|m| &m.id == match_id)
    }

    /// Short description for logs and actions.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "players={},league_locked={},phase={},champion={}",
            self.roster.len(),
            self.league_locked,
            self.bracket_phase(),
            self.champion.as_ref().map_or("none", PlayerName::as_str)
        )
    }
}

/// What a transition did, for logs and the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The command name (e.g., "`ConfirmMatch`").
    pub name: String,
    /// Optional additional details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: EventState,
    /// What the transition did.
    pub action: Action,
}
