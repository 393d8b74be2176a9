// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Archived event queries.
//!
//! Events are returned oldest first by completion time. Ties fall back to
//! the event id so the order is stable across runs.

use diesel::SqliteConnection;
use diesel::prelude::*;
use ladder_cup_domain::ArchivedEvent;
use tracing::debug;

use crate::data_models::ArchivedEventSummary;
use crate::diesel_schema::archived_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for archived event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = archived_events)]
struct ArchivedEventRow {
    event_id: String,
    recorded_at: i64,
    champion: String,
    player_count: i32,
}

/// Loads every archived event.
///
/// # Errors
///
/// Returns an error if the query fails or a stored payload cannot be decoded.
pub fn load_archived_events(
    conn: &mut SqliteConnection,
) -> Result<Vec<ArchivedEvent>, PersistenceError> {
    let payloads: Vec<String> = archived_events::table
        .select(archived_events::payload_json)
        .order((archived_events::recorded_at.asc(), archived_events::event_id.asc()))
        .load(conn)?;

    debug!(count = payloads.len(), "Loaded archived events");

    payloads
        .iter()
        .map(|payload| serde_json::from_str(payload).map_err(PersistenceError::from))
        .collect()
}

/// Loads one archived event by id.
///
/// # Errors
///
/// Returns `PersistenceError::EventNotFound` if no event has this id.
pub fn get_archived_event(
    conn: &mut SqliteConnection,
    event_id: &str,
) -> Result<ArchivedEvent, PersistenceError> {
    let payload: Option<String> = archived_events::table
        .filter(archived_events::event_id.eq(event_id))
        .select(archived_events::payload_json)
        .first(conn)
        .optional()?;

    let payload: String =
        payload.ok_or_else(|| PersistenceError::EventNotFound(event_id.to_string()))?;
    Ok(serde_json::from_str(&payload)?)
}

/// Lists archived events without decoding their payloads.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_archived_event_summaries(
    conn: &mut SqliteConnection,
) -> Result<Vec<ArchivedEventSummary>, PersistenceError> {
    let rows: Vec<ArchivedEventRow> = archived_events::table
        .select(ArchivedEventRow::as_select())
        .order((archived_events::recorded_at.asc(), archived_events::event_id.asc()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| ArchivedEventSummary {
            event_id: row.event_id,
            recorded_at: row.recorded_at,
            champion: row.champion,
            player_count: row.player_count,
        })
        .collect())
}
