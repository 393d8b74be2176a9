// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{KnockoutStage, MatchId};

/// Errors that can occur during domain validation.
///
/// Every variant is a recoverable, user-facing rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The roster has no players.
    EmptyRoster,
    /// A player name is empty or collides with a reserved marker.
    InvalidPlayerName(String),
    /// A player name appears more than once on the roster.
    DuplicatePlayer(String),
    /// A player is not on the event's roster.
    UnknownPlayer(String),
    /// Unknown knockout stage name.
    InvalidStage(String),
    /// No match with this id exists in the event.
    MatchNotFound(MatchId),
    /// A match was addressed in the wrong phase.
    WrongPhase {
        /// The match.
        match_id: MatchId,
        /// What the operation expected.
        expected: &'static str,
    },
    /// A decision was requested before both scores were entered.
    ScoresRequired {
        /// The match.
        match_id: MatchId,
    },
    /// A drawn knockout match has no complete penalty shoot-out.
    PenaltiesRequired {
        /// The match.
        match_id: MatchId,
    },
    /// A drawn knockout match has a tied penalty shoot-out.
    PenaltiesTied {
        /// The match.
        match_id: MatchId,
    },
    /// One or both slots are not yet filled with a player.
    ParticipantsUnassigned {
        /// The match.
        match_id: MatchId,
    },
    /// A knockout match was confirmed before an earlier stage.
    StageOutOfOrder {
        /// The match.
        match_id: MatchId,
        /// The earliest stage still unconfirmed.
        pending: KnockoutStage,
    },
    /// The league cannot be finalized yet.
    LeagueNotReady {
        /// Human-readable reasons blocking finalization.
        reasons: Vec<String>,
    },
    /// The final's winner cannot be computed.
    WinnerUndetermined {
        /// The stage whose outcome was requested.
        stage: KnockoutStage,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "Roster must contain at least one player"),
            Self::InvalidPlayerName(msg) => write!(f, "Invalid player name: {msg}"),
            Self::DuplicatePlayer(name) => {
                write!(f, "Player '{name}' appears more than once on the roster")
            }
            Self::UnknownPlayer(name) => write!(f, "Player '{name}' is not on the roster"),
            Self::InvalidStage(stage) => write!(f, "Invalid knockout stage: {stage}"),
            Self::MatchNotFound(id) => write!(f, "Match {id} not found"),
            Self::WrongPhase { match_id, expected } => {
                write!(f, "Match {match_id} is not a {expected} match")
            }
            Self::ScoresRequired { match_id } => {
                write!(f, "Match {match_id}: scores required")
            }
            Self::PenaltiesRequired { match_id } => {
                write!(f, "Match {match_id} is drawn: penalty scores required")
            }
            Self::PenaltiesTied { match_id } => {
                write!(f, "Match {match_id}: penalty scores must break the tie")
            }
            Self::ParticipantsUnassigned { match_id } => {
                write!(f, "Match {match_id} does not have two players assigned")
            }
            Self::StageOutOfOrder { match_id, pending } => {
                write!(f, "Match {match_id} cannot be confirmed before the {pending}")
            }
            Self::LeagueNotReady { reasons } => {
                write!(f, "League cannot be finalized: {}", reasons.join("; "))
            }
            Self::WinnerUndetermined { stage } => {
                write!(f, "Winner of the {stage} is undetermined")
            }
        }
    }
}

impl std::error::Error for DomainError {}
