// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::EventState;
use ladder_cup_domain::{ArchivedEvent, PlayerName};
use tracing::info;

/// Freezes a finished event into an archive record.
///
/// Standings are recomputed from the league fixtures at the time of the call.
///
/// # Arguments
///
/// * `state` - The finished event
/// * `id` - Unique id for the archived event
/// * `timestamp_ms` - Completion time in milliseconds since the Unix epoch
///
/// # Errors
///
/// Returns `CoreError::NoChampion` if no champion has been crowned.
pub fn archive_event(
    state: &EventState,
    id: &str,
    timestamp_ms: i64,
) -> Result<ArchivedEvent, CoreError> {
    let winner: PlayerName = state.champion.clone().ok_or(CoreError::NoChampion)?;

    info!(event_id = id, champion = %winner, "Archiving event");

    Ok(ArchivedEvent {
        id: id.to_string(),
        timestamp: timestamp_ms,
        league_matches: state.league_matches.clone(),
        knockout_matches: state.bracket.matches(),
        standings: state.standings(),
        winner,
        players: state.roster.players().to_vec(),
    })
}
