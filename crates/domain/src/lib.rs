// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod aggregation;
mod archive;
mod conflicts;
mod error;
mod head_to_head;
mod outcome;
mod readiness;
mod standings;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use aggregation::{
    AggregatedRecord, PhaseFilter, RecordSortKey, SortDirection, aggregate_records, sort_records,
};
pub use archive::{ArchivedEvent, TitleCount, champion_tally, matches_from_archive};
pub use conflicts::{
    ConflictReport, detect_conflicts, find_duplicate_pairings, find_round_conflicts,
};
pub use head_to_head::{OpponentRecord, head_to_head};
pub use outcome::{MatchOutcome, decide_winner, decide_winner_name, resolve_outcome};
pub use readiness::{LeagueReadiness, evaluate_league_readiness, find_incomplete_matches};
pub use standings::{Standing, calculate_standings, player_at_rank};

// Re-export public types
pub use error::DomainError;
pub use types::{
    AWAITING_WINNER_MARKER, KnockoutStage, Match, MatchId, MatchRole, Participant, Phase,
    PlayerName, Roster, Side, UNASSIGNED_MARKER,
};
pub use validation::{validate_player_name, validate_roster, validate_roster_member};
