// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League readiness evaluation.
//!
//! Decides whether the league can be finalized and the knockout seeded.
//! Readiness is **computed**, not stored. It's a pure function of the
//! league fixtures.

use crate::conflicts::{ConflictReport, detect_conflicts};
use crate::types::{Match, MatchId, PlayerName};
use serde::Serialize;

/// Outcome of the readiness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueReadiness {
    /// Fixtures still missing a score.
    pub incomplete_matches: Vec<MatchId>,
    /// Fixture conflicts.
    pub conflicts: ConflictReport,
    /// Human-readable reasons finalization is blocked. Empty when ready.
    pub blocking_reasons: Vec<String>,
}

impl LeagueReadiness {
    /// Whether the league may be finalized.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.blocking_reasons.is_empty()
    }
}

/// Lists league fixtures that are not score-complete.
#[must_use]
pub fn find_incomplete_matches(matches: &[Match]) -> Vec<MatchId> {
    matches
        .iter()
        .filter(|m| !m.is_score_complete())
        .map(|m| m.id.clone())
        .collect()
}

/// Evaluates whether the league can be finalized.
///
/// The league is ready when every fixture has both scores and neither
/// conflict check fires.
///
/// # Arguments
///
/// * `matches` - The league fixtures
#[must_use]
pub fn evaluate_league_readiness(matches: &[Match]) -> LeagueReadiness {
    let incomplete_matches = find_incomplete_matches(matches);
    let conflicts = detect_conflicts(matches);
    let mut blocking_reasons = Vec::new();

    if !incomplete_matches.is_empty() {
        blocking_reasons.push(format!(
            "{} matches have no final score",
            incomplete_matches.len()
        ));
    }

    for (round, players) in &conflicts.round_conflicts {
        let names: Vec<&str> = players.iter().map(PlayerName::as_str).collect();
        blocking_reasons.push(format!(
            "Round {round} has players scheduled more than once: {}",
            names.join(", ")
        ));
    }

    if !conflicts.duplicate_pairing_matches.is_empty() {
        let ids: Vec<&str> = conflicts
            .duplicate_pairing_matches
            .iter()
            .map(MatchId::as_str)
            .collect();
        blocking_reasons.push(format!("Duplicate pairings in matches {}", ids.join(", ")));
    }

    LeagueReadiness {
        incomplete_matches,
        conflicts,
        blocking_reasons,
    }
}
