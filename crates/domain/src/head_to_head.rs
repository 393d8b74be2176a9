// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregation::PhaseFilter;
use crate::outcome::resolve_outcome;
use crate::types::{Match, PlayerName};
use serde::{Deserialize, Serialize};

/// One player's record against a single opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentRecord {
    /// The opponent.
    pub opponent: PlayerName,
    /// Matches between the two.
    pub played: u32,
    /// Wins for the player.
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses for the player.
    pub losses: u32,
    /// Goals scored by the player.
    pub gf: u32,
    /// Goals conceded by the player.
    pub ga: u32,
}

/// Breaks a player's history down by opponent.
///
/// Uses the same inclusion and outcome rules as `aggregate_records`.
/// Matches against an unassigned or unseeded slot are skipped.
///
/// # Returns
///
/// One record per opponent, most-played first. Ties keep first-seen order.
#[must_use]
pub fn head_to_head<'a, I>(
    matches: I,
    player: &PlayerName,
    filter: PhaseFilter,
) -> Vec<OpponentRecord>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut records: Vec<OpponentRecord> = Vec::new();

    for m in matches {
        if !filter.admits(m.phase()) {
            continue;
        }
        let Some(side) = m.side_of(player) else {
            continue;
        };
        let Some(opponent) = m.participant(side.other()).name() else {
            continue;
        };
        let (Some(outcome), Some(scored), Some(conceded)) =
            (resolve_outcome(m), m.score(side), m.score(side.other()))
        else {
            continue;
        };

        let position = records.iter().position(|r| &r.opponent == opponent);
        let record = if let Some(position) = position {
            &mut records[position]
        } else {
            records.push(OpponentRecord {
                opponent: opponent.clone(),
                played: 0,
                wins: 0,
                draws: 0,
                losses: 0,
                gf: 0,
                ga: 0,
            });
            let last = records.len() - 1;
            &mut records[last]
        };

        record.played += 1;
        record.gf = record.gf.saturating_add(scored);
        record.ga = record.ga.saturating_add(conceded);
        match outcome.won_by(side) {
            Some(true) => record.wins += 1,
            Some(false) => record.losses += 1,
            None => record.draws += 1,
        }
    }

    records.sort_by(|a, b| b.played.cmp(&a.played));
    records
}
