// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stepladder knockout.
//!
//! Three matches, each feeding the next:
//!
//! - **Semifinal**: league rank 3 against rank 4
//! - **Prefinal**: semifinal winner against rank 2
//! - **Final**: prefinal winner against rank 1
//!
//! Stages are confirmed strictly in ladder order. Confirming a match locks it,
//! clears every later stage and seeds the next one with its winner and the
//! waiting league seed.

use crate::state::EventState;
use ladder_cup_domain::{
    DomainError, KnockoutStage, Match, MatchId, Participant, PlayerName, Standing,
    decide_winner_name, player_at_rank,
};

/// Id of the semifinal.
pub const SEMIFINAL_ID: &str = "T1";
/// Id of the prefinal.
pub const PREFINAL_ID: &str = "T2";
/// Id of the final.
pub const FINAL_ID: &str = "T3";

/// League ranks seeded straight into the semifinal.
const SEMIFINAL_SEEDS: (usize, usize) = (3, 4);

/// The three knockout matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bracket {
    /// Rank 3 against rank 4.
    pub semifinal: Match,
    /// Semifinal winner against rank 2.
    pub prefinal: Match,
    /// Prefinal winner against rank 1.
    pub final_match: Match,
}

impl Bracket {
    /// A bracket with every slot awaiting a winner.
    #[must_use]
    pub fn unseeded() -> Self {
        Self {
            semifinal: Match::knockout(SEMIFINAL_ID, KnockoutStage::Semifinal),
            prefinal: Match::knockout(PREFINAL_ID, KnockoutStage::Prefinal),
            final_match: Match::knockout(FINAL_ID, KnockoutStage::Final),
        }
    }

    /// A fresh bracket seeded from the final league table.
    ///
    /// A rank the table cannot fill stays `AwaitingWinner`.
    #[must_use]
    pub fn seeded(standings: &[Standing]) -> Self {
        let mut bracket: Self = Self::unseeded();
        bracket.semifinal.p1 = seed(standings, SEMIFINAL_SEEDS.0);
        bracket.semifinal.p2 = seed(standings, SEMIFINAL_SEEDS.1);
        bracket
    }

    /// The match at the given stage.
    #[must_use]
    pub const fn stage(&self, stage: KnockoutStage) -> &Match {
        match stage {
            KnockoutStage::Semifinal => &self.semifinal,
            KnockoutStage::Prefinal => &self.prefinal,
            KnockoutStage::Final => &self.final_match,
        }
    }

    pub(crate) const fn stage_mut(&mut self, stage: KnockoutStage) -> &mut Match {
        match stage {
            KnockoutStage::Semifinal => &mut self.semifinal,
            KnockoutStage::Prefinal => &mut self.prefinal,
            KnockoutStage::Final => &mut self.final_match,
        }
    }

    /// Stage of the bracket match with this id.
    #[must_use]
    pub fn stage_of(&self, match_id: &MatchId) -> Option<KnockoutStage> {
        KnockoutStage::ALL
            .into_iter()
            .find(|stage| &self.stage(*stage).id == match_id)
    }

    /// Earliest stage before `stage` that is not yet confirmed.
    #[must_use]
    pub fn pending_before(&self, stage: KnockoutStage) -> Option<KnockoutStage> {
        KnockoutStage::ALL
            .into_iter()
            .take_while(|earlier| *earlier < stage)
            .find(|earlier| !self.stage(*earlier).completed)
    }

    /// The matches in ladder order.
    #[must_use]
    pub fn matches(&self) -> Vec<Match> {
        vec![
            self.semifinal.clone(),
            self.prefinal.clone(),
            self.final_match.clone(),
        ]
    }
}

impl Default for Bracket {
    fn default() -> Self {
        Self::unseeded()
    }
}

/// Where the event stands in the stepladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketPhase {
    /// League still open; the bracket is not seeded.
    Seeding,
    /// Waiting on the semifinal.
    SemifinalPending,
    /// Waiting on the prefinal.
    PrefinalPending,
    /// Waiting on the final or on the champion being crowned.
    FinalPending,
    /// A champion is crowned.
    Champion,
}

impl BracketPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seeding => "seeding",
            Self::SemifinalPending => "semifinal_pending",
            Self::PrefinalPending => "prefinal_pending",
            Self::FinalPending => "final_pending",
            Self::Champion => "champion",
        }
    }
}

impl std::fmt::Display for BracketPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives the bracket phase from the event state.
#[must_use]
pub const fn bracket_phase(state: &EventState) -> BracketPhase {
    if !state.league_locked {
        BracketPhase::Seeding
    } else if state.champion.is_some() {
        BracketPhase::Champion
    } else if !state.bracket.semifinal.completed {
        BracketPhase::SemifinalPending
    } else if !state.bracket.prefinal.completed {
        BracketPhase::PrefinalPending
    } else {
        BracketPhase::FinalPending
    }
}

fn seed(standings: &[Standing], rank: usize) -> Participant {
    player_at_rank(standings, rank).map_or(Participant::AwaitingWinner, |name| {
        Participant::Player(name.clone())
    })
}

/// Confirms the match at `stage` and seeds the stage after it.
///
/// # Arguments
///
/// * `bracket` - The bracket to update in place
/// * `stage` - The stage being confirmed
/// * `standings` - The final league table, for the waiting seed
///
/// # Returns
///
/// The winner of the confirmed match.
///
/// # Errors
///
/// Returns an error if:
/// - An earlier stage is not confirmed
/// - Either slot holds no player
/// - A score is missing
/// - The match is drawn and the shoot-out is missing or tied
///
/// On error the bracket is left unchanged.
pub fn confirm_stage(
    bracket: &mut Bracket,
    stage: KnockoutStage,
    standings: &[Standing],
) -> Result<PlayerName, DomainError> {
    let current: &Match = bracket.stage(stage);
    if let Some(pending) = bracket.pending_before(stage) {
        return Err(DomainError::StageOutOfOrder {
            match_id: current.id.clone(),
            pending,
        });
    }
    if !current.has_both_players() {
        return Err(DomainError::ParticipantsUnassigned {
            match_id: current.id.clone(),
        });
    }
    let winner: PlayerName = decide_winner_name(current)?;

    bracket.stage_mut(stage).completed = true;

    for later in KnockoutStage::ALL.into_iter().filter(|later| *later > stage) {
        let target: &mut Match = bracket.stage_mut(later);
        *target = Match::knockout(target.id.as_str(), later);
    }

    if let Some(next) = stage.next() {
        let target: &mut Match = bracket.stage_mut(next);
        target.p1 = Participant::Player(winner.clone());
        target.p2 = next
            .waiting_seed()
            .map_or(Participant::AwaitingWinner, |rank| seed(standings, rank));
    }

    Ok(winner)
}

/// Winner of the confirmed final.
///
/// # Errors
///
/// Returns `DomainError::WinnerUndetermined` if the final's result does not
/// produce a winner.
pub fn final_winner(bracket: &Bracket) -> Result<PlayerName, DomainError> {
    decide_winner_name(&bracket.final_match).map_err(|_| DomainError::WinnerUndetermined {
        stage: KnockoutStage::Final,
    })
}
