// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ladder_cup_domain::{MatchId, PlayerName, Side};
use serde::{Deserialize, Serialize};

/// A command represents operator intent as data only.
///
/// Commands are the only way to request state changes. They deserialize
/// from `{"command": "confirm_match", "match_id": "T1"}` style objects so
/// whole events can be scripted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Put a player into (or clear) one slot of a league fixture.
    AssignPlayer {
        /// The league fixture.
        match_id: MatchId,
        /// Which slot.
        slot: Side,
        /// The player, or `None` to clear the slot.
        player: Option<PlayerName>,
    },
    /// Enter or clear the score of a league fixture.
    RecordLeagueScore {
        /// The league fixture.
        match_id: MatchId,
        /// Goals for `p1`.
        s1: Option<u32>,
        /// Goals for `p2`.
        s2: Option<u32>,
    },
    /// Lock the league and seed the knockout bracket.
    FinalizeLeague,
    /// Reopen the league, discarding the bracket.
    UnlockLeague,
    /// Enter or clear the score of an unconfirmed knockout match.
    RecordKnockoutScore {
        /// The knockout match.
        match_id: MatchId,
        /// Goals for `p1`.
        s1: Option<u32>,
        /// Goals for `p2`.
        s2: Option<u32>,
    },
    /// Enter or clear the penalty shoot-out of an unconfirmed knockout match.
    RecordPenalties {
        /// The knockout match.
        match_id: MatchId,
        /// Penalties for `p1`.
        pk1: Option<u32>,
        /// Penalties for `p2`.
        pk2: Option<u32>,
    },
    /// Confirm a knockout result and seed the next stage.
    ConfirmMatch {
        /// The knockout match.
        match_id: MatchId,
    },
    /// Unlock a confirmed knockout match for editing.
    ResetMatch {
        /// The knockout match.
        match_id: MatchId,
    },
    /// Crown the winner of the confirmed final.
    FinishTournament,
    /// Withdraw the champion and reopen the final.
    UndoChampion,
}

impl Command {
    /// Short name used in actions and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssignPlayer { .. } => "AssignPlayer",
            Self::RecordLeagueScore { .. } => "RecordLeagueScore",
            Self::FinalizeLeague => "FinalizeLeague",
            Self::UnlockLeague => "UnlockLeague",
            Self::RecordKnockoutScore { .. } => "RecordKnockoutScore",
            Self::RecordPenalties { .. } => "RecordPenalties",
            Self::ConfirmMatch { .. } => "ConfirmMatch",
            Self::ResetMatch { .. } => "ResetMatch",
            Self::FinishTournament => "FinishTournament",
            Self::UndoChampion => "UndoChampion",
        }
    }
}
