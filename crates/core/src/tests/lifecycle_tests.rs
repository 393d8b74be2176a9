// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle guards around league finalization, unlocking and archiving.

use super::helpers::{
    apply_all, assign, confirm, create_final_confirmed_state, create_finalized_state,
    create_scored_league, create_test_state, knockout_score, league_score,
};
use crate::{BracketPhase, Command, CoreError, EventState, archive_event, apply};
use ladder_cup_domain::{ArchivedEvent, DomainError, Participant, PlayerName, Side};

#[test]
fn test_finalize_rejects_unscored_league() {
    let state: EventState = create_test_state();

    let result = apply(&state, Command::FinalizeLeague);

    match result {
        Err(CoreError::DomainViolation(DomainError::LeagueNotReady { reasons })) => {
            assert_eq!(reasons, vec![String::from("6 matches have no final score")]);
        }
        other => panic!("expected LeagueNotReady, got {other:?}"),
    }
}

#[test]
fn test_finalize_rejects_double_booked_round() {
    let state: EventState = apply_all(&create_scored_league(), vec![assign("L2", Side::First, "A")]);

    let result = apply(&state, Command::FinalizeLeague);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::LeagueNotReady { .. }))
    ));
    assert!(!state.league_locked);
}

#[test]
fn test_finalized_league_rejects_edits() {
    let state: EventState = create_finalized_state();

    assert!(state.league_locked);
    assert!(matches!(
        apply(&state, league_score("L1", 0, 5)),
        Err(CoreError::LeagueLocked)
    ));
    assert!(matches!(
        apply(&state, assign("L1", Side::First, "D")),
        Err(CoreError::LeagueLocked)
    ));
    assert!(matches!(
        apply(&state, Command::FinalizeLeague),
        Err(CoreError::LeagueLocked)
    ));
}

#[test]
fn test_knockout_commands_need_finalized_league() {
    let state: EventState = create_scored_league();

    assert!(matches!(
        apply(&state, knockout_score("T1", 1, 0)),
        Err(CoreError::LeagueNotFinalized)
    ));
    assert!(matches!(
        apply(&state, confirm("T1")),
        Err(CoreError::LeagueNotFinalized)
    ));
    assert!(matches!(
        apply(&state, Command::FinishTournament),
        Err(CoreError::LeagueNotFinalized)
    ));
    assert!(matches!(
        apply(&state, Command::UnlockLeague),
        Err(CoreError::LeagueNotFinalized)
    ));
}

#[test]
fn test_unlock_discards_bracket_and_champion() {
    let crowned: EventState =
        apply_all(&create_final_confirmed_state(), vec![Command::FinishTournament]);

    let unlocked: EventState = apply(&crowned, Command::UnlockLeague).unwrap().new_state;

    assert!(!unlocked.league_locked);
    assert!(unlocked.champion.is_none());
    assert_eq!(unlocked.bracket.semifinal.p1, Participant::AwaitingWinner);
    assert_eq!(unlocked.bracket_phase(), BracketPhase::Seeding);
    assert_eq!(unlocked.league_matches, crowned.league_matches);
}

#[test]
fn test_refinalizing_reseeds_from_edited_league() {
    let state: EventState = apply_all(&create_finalized_state(), vec![
        Command::UnlockLeague,
        league_score("L2", 0, 4),
        Command::FinalizeLeague,
    ]);

    // D overtakes C for third
    assert_eq!(state.bracket.semifinal.p1, Participant::player("D"));
    assert_eq!(state.bracket.semifinal.p2, Participant::player("C"));
}

#[test]
fn test_archive_requires_champion() {
    let state: EventState = create_final_confirmed_state();

    assert!(matches!(
        archive_event(&state, "event-1", 0),
        Err(CoreError::NoChampion)
    ));
}

#[test]
fn test_archive_freezes_finished_event() {
    let crowned: EventState =
        apply_all(&create_final_confirmed_state(), vec![Command::FinishTournament]);

    let event: ArchivedEvent = archive_event(&crowned, "event-1", 1_760_000_000_000).unwrap();

    assert_eq!(event.id, "event-1");
    assert_eq!(event.timestamp, 1_760_000_000_000);
    assert_eq!(event.winner, PlayerName::new("C"));
    assert_eq!(event.league_matches.len(), 6);
    assert_eq!(event.knockout_matches.len(), 3);
    assert!(event.knockout_matches.iter().all(|m| m.completed));
    assert_eq!(event.standings[0].name, PlayerName::new("A"));
    assert_eq!(event.players.len(), 4);
}
