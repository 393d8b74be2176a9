// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{AWAITING_WINNER_MARKER, PlayerName, Roster, UNASSIGNED_MARKER};
use std::collections::HashSet;

/// Validates a single player name.
///
/// # Arguments
///
/// * `name` - The name to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or only whitespace
/// - The name equals the `"TBD"` marker used for unseeded knockout slots
pub fn validate_player_name(name: &PlayerName) -> Result<(), DomainError> {
    // Rule: a name must be distinguishable from the wire sentinels
    if name.as_str().trim() == UNASSIGNED_MARKER {
        return Err(DomainError::InvalidPlayerName(String::from(
            "Name cannot be empty",
        )));
    }

    if name.as_str() == AWAITING_WINNER_MARKER {
        return Err(DomainError::InvalidPlayerName(format!(
            "'{AWAITING_WINNER_MARKER}' is reserved for unseeded knockout slots"
        )));
    }

    Ok(())
}

/// Validates a roster before it is accepted for an event.
///
/// # Arguments
///
/// * `players` - The players in roster order
///
/// # Errors
///
/// Returns an error if the roster is empty, a name is invalid, or a name
/// is repeated.
pub fn validate_roster(players: &[PlayerName]) -> Result<(), DomainError> {
    if players.is_empty() {
        return Err(DomainError::EmptyRoster);
    }

    let mut seen: HashSet<&PlayerName> = HashSet::new();
    for player in players {
        validate_player_name(player)?;
        if !seen.insert(player) {
            return Err(DomainError::DuplicatePlayer(player.to_string()));
        }
    }

    Ok(())
}

/// Validates that a player belongs to the event's roster.
///
/// # Errors
///
/// Returns `DomainError::UnknownPlayer` if the player is not on the roster.
pub fn validate_roster_member(roster: &Roster, player: &PlayerName) -> Result<(), DomainError> {
    if !roster.contains(player) {
        return Err(DomainError::UnknownPlayer(player.to_string()));
    }
    Ok(())
}
