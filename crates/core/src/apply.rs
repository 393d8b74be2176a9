// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bracket::{Bracket, confirm_stage, final_winner};
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Action, EventState, TransitionResult};
use ladder_cup_domain::{
    DomainError, KnockoutStage, LeagueReadiness, Match, MatchId, MatchRole, Participant,
    PlayerName, Side, Standing, validate_roster_member,
};
use tracing::{debug, info};

/// Applies a command to the current state, producing a new state and action.
///
/// The input state is never modified. On success the returned state replaces
/// it wholesale; on error the caller keeps the state it had.
///
/// # Arguments
///
/// * `state` - The current event state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the action taken
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates a domain rule (unknown match or player, missing
///   scores, an unresolved draw, a league that is not ready)
/// - The command does not fit the event's lifecycle (league locked or not
///   finalized, match confirmed, champion crowned)
pub fn apply(state: &EventState, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let mut new_state: EventState = state.clone();

    let details: String = match apply_to(&mut new_state, command) {
        Ok(details) => details,
        Err(err) => {
            debug!(command = name, error = %err, "Command rejected");
            return Err(err);
        }
    };

    info!(command = name, details = %details, state = %new_state.summary(), "Command applied");

    Ok(TransitionResult {
        new_state,
        action: Action::new(String::from(name), Some(details)),
    })
}

fn apply_to(state: &mut EventState, command: Command) -> Result<String, CoreError> {
    match command {
        Command::AssignPlayer {
            match_id,
            slot,
            player,
        } => assign_player(state, &match_id, slot, player),
        Command::RecordLeagueScore { match_id, s1, s2 } => {
            record_league_score(state, &match_id, s1, s2)
        }
        Command::FinalizeLeague => finalize_league(state),
        Command::UnlockLeague => unlock_league(state),
        Command::RecordKnockoutScore { match_id, s1, s2 } => {
            let fixture: &mut Match = editable_knockout_match(state, &match_id)?;
            fixture.s1 = s1;
            fixture.s2 = s2;
            Ok(format!("{match_id} score {}", format_pair(s1, s2)))
        }
        Command::RecordPenalties {
            match_id,
            pk1,
            pk2,
        } => {
            let fixture: &mut Match = editable_knockout_match(state, &match_id)?;
            if let MatchRole::Knockout { stage, .. } = fixture.role {
                fixture.role = MatchRole::Knockout { stage, pk1, pk2 };
            }
            Ok(format!("{match_id} penalties {}", format_pair(pk1, pk2)))
        }
        Command::ConfirmMatch { match_id } => confirm_match(state, &match_id),
        Command::ResetMatch { match_id } => {
            let stage: KnockoutStage = knockout_stage(state, &match_id)?;
            ensure_no_champion(state)?;
            state.bracket.stage_mut(stage).completed = false;
            Ok(format!("{match_id} ({stage}) reopened"))
        }
        Command::FinishTournament => finish_tournament(state),
        Command::UndoChampion => {
            let Some(previous) = state.champion.take() else {
                return Err(CoreError::NoChampion);
            };
            state.bracket.final_match.completed = false;
            Ok(format!("Champion {previous} withdrawn; final reopened"))
        }
    }
}

fn format_pair(a: Option<u32>, b: Option<u32>) -> String {
    let show = |v: Option<u32>| v.map_or_else(|| String::from("-"), |v| v.to_string());
    format!("{}-{}", show(a), show(b))
}

const fn ensure_league_open(state: &EventState) -> Result<(), CoreError> {
    if state.league_locked {
        return Err(CoreError::LeagueLocked);
    }
    Ok(())
}

const fn ensure_no_champion(state: &EventState) -> Result<(), CoreError> {
    if state.champion.is_some() {
        return Err(CoreError::ChampionCrowned);
    }
    Ok(())
}

/// Looks up an open league fixture.
fn league_fixture<'a>(
    state: &'a mut EventState,
    match_id: &MatchId,
) -> Result<&'a mut Match, CoreError> {
    ensure_league_open(state)?;
    if state.bracket.stage_of(match_id).is_some() {
        return Err(DomainError::WrongPhase {
            match_id: match_id.clone(),
            expected: "league",
        }
        .into());
    }
    state
        .league_match_mut(match_id)
        .ok_or_else(|| DomainError::MatchNotFound(match_id.clone()).into())
}

/// Resolves a knockout match id to its stage.
fn knockout_stage(state: &EventState, match_id: &MatchId) -> Result<KnockoutStage, CoreError> {
    if !state.league_locked {
        return Err(CoreError::LeagueNotFinalized);
    }
    if let Some(stage) = state.bracket.stage_of(match_id) {
        return Ok(stage);
    }
    if state.league_match(match_id).is_some() {
        return Err(DomainError::WrongPhase {
            match_id: match_id.clone(),
            expected: "knockout",
        }
        .into());
    }
    Err(DomainError::MatchNotFound(match_id.clone()).into())
}

/// Looks up an unconfirmed knockout match for score entry.
fn editable_knockout_match<'a>(
    state: &'a mut EventState,
    match_id: &MatchId,
) -> Result<&'a mut Match, CoreError> {
    let stage: KnockoutStage = knockout_stage(state, match_id)?;
    ensure_no_champion(state)?;
    let fixture: &mut Match = state.bracket.stage_mut(stage);
    if fixture.completed {
        return Err(CoreError::MatchLocked(match_id.clone()));
    }
    Ok(fixture)
}

fn assign_player(
    state: &mut EventState,
    match_id: &MatchId,
    slot: Side,
    player: Option<PlayerName>,
) -> Result<String, CoreError> {
    ensure_league_open(state)?;
    if let Some(name) = &player {
        validate_roster_member(&state.roster, name)?;
    }

    let participant: Participant = player.map_or(Participant::Unassigned, Participant::Player);
    let details: String = format!(
        "{match_id} {} = {participant}",
        match slot {
            Side::First => "p1",
            Side::Second => "p2",
        }
    );

    let fixture: &mut Match = league_fixture(state, match_id)?;
    match slot {
        Side::First => fixture.p1 = participant,
        Side::Second => fixture.p2 = participant,
    }

    Ok(details)
}

fn record_league_score(
    state: &mut EventState,
    match_id: &MatchId,
    s1: Option<u32>,
    s2: Option<u32>,
) -> Result<String, CoreError> {
    let fixture: &mut Match = league_fixture(state, match_id)?;
    fixture.s1 = s1;
    fixture.s2 = s2;
    fixture.completed = fixture.is_score_complete();

    Ok(format!("{match_id} score {}", format_pair(s1, s2)))
}

fn finalize_league(state: &mut EventState) -> Result<String, CoreError> {
    ensure_league_open(state)?;

    let readiness: LeagueReadiness = state.league_readiness();
    if !readiness.is_ready() {
        return Err(DomainError::LeagueNotReady {
            reasons: readiness.blocking_reasons,
        }
        .into());
    }

    let standings: Vec<Standing> = state.standings();
    state.bracket = Bracket::seeded(&standings);
    state.champion = None;
    state.league_locked = true;

    Ok(format!(
        "League locked; semifinal {} vs {}",
        state.bracket.semifinal.p1, state.bracket.semifinal.p2
    ))
}

fn unlock_league(state: &mut EventState) -> Result<String, CoreError> {
    if !state.league_locked {
        return Err(CoreError::LeagueNotFinalized);
    }

    state.league_locked = false;
    state.bracket = Bracket::unseeded();
    state.champion = None;

    Ok(String::from("League reopened; bracket discarded"))
}

fn confirm_match(state: &mut EventState, match_id: &MatchId) -> Result<String, CoreError> {
    let stage: KnockoutStage = knockout_stage(state, match_id)?;
    ensure_no_champion(state)?;
    if state.bracket.stage(stage).completed {
        return Err(CoreError::AlreadyConfirmed(match_id.clone()));
    }

    let standings: Vec<Standing> = state.standings();
    let winner: PlayerName = confirm_stage(&mut state.bracket, stage, &standings)?;

    Ok(stage.next().map_or_else(
        || format!("{match_id} ({stage}) won by {winner}"),
        |next| {
            let seeded: &Match = state.bracket.stage(next);
            format!(
                "{match_id} ({stage}) won by {winner}; {next} {} vs {}",
                seeded.p1, seeded.p2
            )
        },
    ))
}

fn finish_tournament(state: &mut EventState) -> Result<String, CoreError> {
    if !state.league_locked {
        return Err(CoreError::LeagueNotFinalized);
    }
    if !state.bracket.final_match.completed {
        return Err(CoreError::FinalNotConfirmed);
    }
    if let Some(pending) = state.bracket.pending_before(KnockoutStage::Final) {
        return Err(DomainError::StageOutOfOrder {
            match_id: state.bracket.final_match.id.clone(),
            pending,
        }
        .into());
    }

    let winner: PlayerName = final_winner(&state.bracket)?;
    let details: String = format!("Champion: {winner}");
    state.champion = Some(winner);

    Ok(details)
}
