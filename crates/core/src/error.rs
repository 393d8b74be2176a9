// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ladder_cup_domain::{DomainError, MatchId};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// League fixtures cannot change once the league is finalized.
    LeagueLocked,
    /// The operation needs a finalized league.
    LeagueNotFinalized,
    /// The knockout match is confirmed and cannot be edited.
    MatchLocked(MatchId),
    /// The knockout match is already confirmed.
    AlreadyConfirmed(MatchId),
    /// The final must be confirmed before a champion can be crowned.
    FinalNotConfirmed,
    /// The bracket is frozen while a champion is crowned.
    ChampionCrowned,
    /// No champion has been crowned.
    NoChampion,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::LeagueLocked => write!(f, "League is finalized and cannot be edited"),
            Self::LeagueNotFinalized => write!(f, "League has not been finalized"),
            Self::MatchLocked(id) => write!(f, "Match {id} is confirmed and cannot be edited"),
            Self::AlreadyConfirmed(id) => write!(f, "Match {id} is already confirmed"),
            Self::FinalNotConfirmed => write!(f, "The final has not been confirmed"),
            Self::ChampionCrowned => {
                write!(f, "A champion is crowned; undo the champion first")
            }
            Self::NoChampion => write!(f, "No champion has been crowned"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
