// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League fixture conflict detection.
//!
//! Two independent checks run over the league fixtures:
//!
//! - **Same-round conflict**: a player scheduled in more than one match of
//!   the same round.
//! - **Duplicate pairing**: the same unordered pair of players meeting in more
//!   than one fixture anywhere in the league.
//!
//! Both are pure and never modify matches. Knockout matches are ignored.

use crate::types::{Match, MatchId, PlayerName};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Everything the conflict checks found, keyed for highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    /// Per round, the players scheduled more than once in that round.
    pub round_conflicts: BTreeMap<u32, BTreeSet<PlayerName>>,
    /// Matches containing a player that is double-booked in its round.
    pub round_conflict_matches: BTreeSet<MatchId>,
    /// Matches whose pairing occurs more than once in the league.
    pub duplicate_pairing_matches: BTreeSet<MatchId>,
}

impl ConflictReport {
    /// No conflict of either kind.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.round_conflicts.is_empty() && self.duplicate_pairing_matches.is_empty()
    }

    /// Every flagged match, of either kind.
    #[must_use]
    pub fn conflicted_matches(&self) -> BTreeSet<MatchId> {
        self.round_conflict_matches
            .union(&self.duplicate_pairing_matches)
            .cloned()
            .collect()
    }

    /// Every player double-booked in some round.
    #[must_use]
    pub fn offending_players(&self) -> BTreeSet<PlayerName> {
        self.round_conflicts.values().flatten().cloned().collect()
    }

    /// Whether the given match is flagged.
    #[must_use]
    pub fn is_match_conflicted(&self, match_id: &MatchId) -> bool {
        self.round_conflict_matches.contains(match_id)
            || self.duplicate_pairing_matches.contains(match_id)
    }

    /// Whether the player is double-booked in the given round.
    #[must_use]
    pub fn is_player_conflicted(&self, round: u32, player: &PlayerName) -> bool {
        self.round_conflicts
            .get(&round)
            .is_some_and(|players| players.contains(player))
    }
}

/// Finds players scheduled more than once within a round.
///
/// # Returns
///
/// For every round with a conflict, the set of double-booked players.
/// Rounds without conflicts are absent.
#[must_use]
pub fn find_round_conflicts(matches: &[Match]) -> BTreeMap<u32, BTreeSet<PlayerName>> {
    let mut appearances: BTreeMap<u32, BTreeMap<&PlayerName, usize>> = BTreeMap::new();

    for m in matches {
        let Some(round) = m.round() else {
            continue;
        };
        let counts = appearances.entry(round).or_default();
        for name in [m.p1.name(), m.p2.name()].into_iter().flatten() {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    appearances
        .into_iter()
        .filter_map(|(round, counts)| {
            let repeated: BTreeSet<PlayerName> = counts
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(name, _)| name.clone())
                .collect();
            (!repeated.is_empty()).then_some((round, repeated))
        })
        .collect()
}

/// Finds fixtures whose unordered pairing occurs more than once.
///
/// Fixtures with an unassigned slot never form a pairing.
#[must_use]
pub fn find_duplicate_pairings(matches: &[Match]) -> BTreeSet<MatchId> {
    let mut by_pairing: BTreeMap<(&PlayerName, &PlayerName), Vec<&MatchId>> = BTreeMap::new();

    for m in matches.iter().filter(|m| m.round().is_some()) {
        let (Some(a), Some(b)) = (m.p1.name(), m.p2.name()) else {
            continue;
        };
        let key = if a <= b { (a, b) } else { (b, a) };
        by_pairing.entry(key).or_default().push(&m.id);
    }

    by_pairing
        .into_values()
        .filter(|ids| ids.len() > 1)
        .flatten()
        .cloned()
        .collect()
}

/// Runs both conflict checks over the league fixtures.
#[must_use]
pub fn detect_conflicts(matches: &[Match]) -> ConflictReport {
    let round_conflicts = find_round_conflicts(matches);

    let round_conflict_matches: BTreeSet<MatchId> = matches
        .iter()
        .filter(|m| {
            m.round().is_some_and(|round| {
                round_conflicts.get(&round).is_some_and(|players| {
                    [m.p1.name(), m.p2.name()]
                        .into_iter()
                        .flatten()
                        .any(|p| players.contains(p))
                })
            })
        })
        .map(|m| m.id.clone())
        .collect();

    ConflictReport {
        round_conflicts,
        round_conflict_matches,
        duplicate_pairing_matches: find_duplicate_pairings(matches),
    }
}
