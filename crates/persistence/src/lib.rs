// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Archive store for completed events.
//!
//! Completed events are appended to a `SQLite` database through Diesel and
//! read back as a whole for the historical views.
//!
//! ## Backends
//!
//! - **File**: WAL journaling, created on first use
//! - **In-memory**: a uniquely named shared-cache database per adapter, used
//!   by tests
//!
//! Both run the embedded migrations at construction.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use ladder_cup_domain::ArchivedEvent;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::ArchivedEventSummary;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Where completed events are kept.
///
/// Appends are never retried; a failure is reported to the caller and the
/// event stays unsaved.
pub trait ArchiveStore {
    /// Every archived event, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be read or decoded.
    fn load_all(&mut self) -> Result<Vec<ArchivedEvent>, PersistenceError>;

    /// Appends one event to the archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the event id is already archived or the write fails.
    fn append_one(&mut self, event: &ArchivedEvent) -> Result<(), PersistenceError>;
}

/// `SQLite`-backed archive store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// so adapters never see each other's events.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_archive_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Loads one archived event by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EventNotFound` if no event has this id.
    pub fn get_event(&mut self, event_id: &str) -> Result<ArchivedEvent, PersistenceError> {
        queries::archive::get_archived_event(&mut self.conn, event_id)
    }

    /// Lists archived events without their matches, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_summaries(&mut self) -> Result<Vec<ArchivedEventSummary>, PersistenceError> {
        queries::archive::list_archived_event_summaries(&mut self.conn)
    }
}

impl ArchiveStore for Persistence {
    fn load_all(&mut self) -> Result<Vec<ArchivedEvent>, PersistenceError> {
        queries::archive::load_archived_events(&mut self.conn)
    }

    fn append_one(&mut self, event: &ArchivedEvent) -> Result<(), PersistenceError> {
        mutations::archive::insert_archived_event(&mut self.conn, event)
    }
}
