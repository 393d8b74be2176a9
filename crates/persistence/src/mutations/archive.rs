// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Archived event mutations.
//!
//! The archive is append-only: events are inserted once and never updated.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use ladder_cup_domain::ArchivedEvent;
use tracing::info;

use crate::diesel_schema::archived_events;
use crate::error::PersistenceError;

/// Appends one archived event.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event` - The event to store
///
/// # Errors
///
/// Returns an error if:
/// - An event with the same id is already archived
/// - The event cannot be serialized
/// - The insert fails
pub fn insert_archived_event(
    conn: &mut SqliteConnection,
    event: &ArchivedEvent,
) -> Result<(), PersistenceError> {
    let payload_json: String = serde_json::to_string(event)?;
    let player_count: i32 = i32::try_from(event.players.len()).map_err(|_| {
        PersistenceError::SerializationError(format!(
            "Event '{}' has too many players to store",
            event.id
        ))
    })?;

    let result = diesel::insert_into(archived_events::table)
        .values((
            archived_events::event_id.eq(&event.id),
            archived_events::recorded_at.eq(event.timestamp),
            archived_events::champion.eq(event.winner.as_str()),
            archived_events::player_count.eq(player_count),
            archived_events::payload_json.eq(&payload_json),
        ))
        .execute(conn);

    match result {
        Ok(_) => {
            info!(event_id = %event.id, champion = %event.winner, "Archived event stored");
            Ok(())
        }
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::DuplicateEvent(event.id.clone()))
        }
        Err(err) => Err(err.into()),
    }
}
