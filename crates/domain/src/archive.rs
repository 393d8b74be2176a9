// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Archived event records.
//!
//! An `ArchivedEvent` is the frozen snapshot of a completed event, exactly as
//! handed to the archive store. The serialized shape uses camelCase keys so
//! stored payloads read as `leagueMatches`, `knockoutMatches`, and so on.

use crate::standings::Standing;
use crate::types::{Match, PlayerName};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a completed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedEvent {
    /// Unique event identifier.
    pub id: String,
    /// Completion time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Final league fixtures.
    pub league_matches: Vec<Match>,
    /// Final knockout matches.
    pub knockout_matches: Vec<Match>,
    /// League table frozen at completion.
    pub standings: Vec<Standing>,
    /// The champion.
    pub winner: PlayerName,
    /// The roster.
    pub players: Vec<PlayerName>,
}

impl ArchivedEvent {
    /// All matches of this event, league first.
    pub fn all_matches(&self) -> impl Iterator<Item = &Match> {
        self.league_matches.iter().chain(&self.knockout_matches)
    }
}

/// Flattens the matches of many events into one list for aggregation.
#[must_use]
pub fn matches_from_archive(events: &[ArchivedEvent]) -> Vec<&Match> {
    events.iter().flat_map(ArchivedEvent::all_matches).collect()
}

/// Number of titles a player has won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCount {
    /// The player.
    pub name: PlayerName,
    /// Events won.
    pub titles: u32,
}

/// Counts titles per champion.
///
/// # Returns
///
/// Most titles first; ties keep the order of each player's first title.
#[must_use]
pub fn champion_tally(events: &[ArchivedEvent]) -> Vec<TitleCount> {
    let mut tally: Vec<TitleCount> = Vec::new();

    for event in events {
        if let Some(entry) = tally.iter_mut().find(|t| t.name == event.winner) {
            entry.titles += 1;
        } else {
            tally.push(TitleCount {
                name: event.winner.clone(),
                titles: 1,
            });
        }
    }

    tally.sort_by(|a, b| b.titles.cmp(&a.titles));
    tally
}
