// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match outcome resolution.
//!
//! A match is decided by its score; a drawn knockout match is decided by
//! its penalty shoot-out. Two entry points share that rule:
//!
//! - [`resolve_outcome`] is lenient and is used for statistics: anything
//!   that cannot be decided by penalties counts as a draw.
//! - [`decide_winner`] is strict and is used by the stepladder: a knockout
//!   match must produce a winner or the caller is told why it cannot.

use crate::error::DomainError;
use crate::types::{Match, PlayerName, Side};
use std::cmp::Ordering;

/// Result of a scored match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The player in this slot won.
    Winner(Side),
    /// Neither side won.
    Draw,
}

impl MatchOutcome {
    /// Outcome seen from one slot: `Some(true)` win, `Some(false)` loss,
    /// `None` draw.
    #[must_use]
    pub fn won_by(self, side: Side) -> Option<bool> {
        match self {
            Self::Winner(winner) => Some(winner == side),
            Self::Draw => None,
        }
    }
}

fn side_from_ordering(ordering: Ordering) -> Option<Side> {
    match ordering {
        Ordering::Greater => Some(Side::First),
        Ordering::Less => Some(Side::Second),
        Ordering::Equal => None,
    }
}

/// Resolves a match outcome for statistics.
///
/// Returns `None` when either score is missing. Equal scores go to the
/// penalty shoot-out only for knockout matches with both penalty scores
/// present and different; otherwise the match is a draw.
#[must_use]
pub fn resolve_outcome(m: &Match) -> Option<MatchOutcome> {
    let (s1, s2) = (m.s1?, m.s2?);

    if let Some(side) = side_from_ordering(s1.cmp(&s2)) {
        return Some(MatchOutcome::Winner(side));
    }

    let decided_on_penalties = match m.penalties() {
        Some((Some(pk1), Some(pk2))) => side_from_ordering(pk1.cmp(&pk2)),
        _ => None,
    };

    Some(decided_on_penalties.map_or(MatchOutcome::Draw, MatchOutcome::Winner))
}

/// Decides the winning slot of a match that must produce a winner.
///
/// # Errors
///
/// Returns an error if:
/// - Either score is missing (`ScoresRequired`)
/// - Scores are level and either penalty score is missing (`PenaltiesRequired`)
/// - Scores are level and penalty scores are equal (`PenaltiesTied`)
pub fn decide_winner(m: &Match) -> Result<Side, DomainError> {
    let (Some(s1), Some(s2)) = (m.s1, m.s2) else {
        return Err(DomainError::ScoresRequired {
            match_id: m.id.clone(),
        });
    };

    if let Some(side) = side_from_ordering(s1.cmp(&s2)) {
        return Ok(side);
    }

    match m.penalties() {
        Some((Some(pk1), Some(pk2))) => {
            side_from_ordering(pk1.cmp(&pk2)).ok_or_else(|| DomainError::PenaltiesTied {
                match_id: m.id.clone(),
            })
        }
        _ => Err(DomainError::PenaltiesRequired {
            match_id: m.id.clone(),
        }),
    }
}

/// Decides the winning player of a match.
///
/// # Errors
///
/// Returns the errors of [`decide_winner`], and `ParticipantsUnassigned` if
/// the winning slot holds no player.
pub fn decide_winner_name(m: &Match) -> Result<PlayerName, DomainError> {
    let side: Side = decide_winner(m)?;
    m.participant(side)
        .name()
        .cloned()
        .ok_or_else(|| DomainError::ParticipantsUnassigned {
            match_id: m.id.clone(),
        })
}
