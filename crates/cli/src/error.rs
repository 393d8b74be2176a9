// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line error type.

use ladder_cup::CoreError;
use ladder_cup_domain::DomainError;
use ladder_cup_persistence::PersistenceError;
use thiserror::Error;

/// Everything a subcommand can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A script or event file is not valid JSON of the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A scripted command was rejected.
    #[error("Command {index} ({name}) rejected: {source}")]
    Rejected {
        /// 1-based position in the script.
        index: usize,
        /// The command name.
        name: &'static str,
        /// Why it was rejected.
        #[source]
        source: CoreError,
    },

    /// An event lifecycle rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The archive could not be read or written.
    #[error("Archive error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A timestamp could not be converted or formatted.
    #[error("Invalid timestamp {millis}: {reason}")]
    Timestamp {
        /// Milliseconds since the Unix epoch.
        millis: i64,
        /// What went wrong.
        reason: String,
    },
}
