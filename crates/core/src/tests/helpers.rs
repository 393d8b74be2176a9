// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, EventState, TransitionResult, apply};
use ladder_cup_domain::{MatchId, PlayerName, Roster, Side};

pub fn create_test_roster() -> Roster {
    Roster::from_names(&["A", "B", "C", "D"]).expect("valid roster")
}

pub fn create_test_state() -> EventState {
    EventState::new(create_test_roster())
}

pub fn assign(match_id: &str, slot: Side, player: &str) -> Command {
    Command::AssignPlayer {
        match_id: MatchId::new(match_id),
        slot,
        player: Some(PlayerName::new(player)),
    }
}

pub fn league_score(match_id: &str, s1: u32, s2: u32) -> Command {
    Command::RecordLeagueScore {
        match_id: MatchId::new(match_id),
        s1: Some(s1),
        s2: Some(s2),
    }
}

pub fn knockout_score(match_id: &str, s1: u32, s2: u32) -> Command {
    Command::RecordKnockoutScore {
        match_id: MatchId::new(match_id),
        s1: Some(s1),
        s2: Some(s2),
    }
}

pub fn penalties(match_id: &str, pk1: u32, pk2: u32) -> Command {
    Command::RecordPenalties {
        match_id: MatchId::new(match_id),
        pk1: Some(pk1),
        pk2: Some(pk2),
    }
}

pub fn confirm(match_id: &str) -> Command {
    Command::ConfirmMatch {
        match_id: MatchId::new(match_id),
    }
}

pub fn reset(match_id: &str) -> Command {
    Command::ResetMatch {
        match_id: MatchId::new(match_id),
    }
}

/// Applies every command in order, panicking on the first rejection.
pub fn apply_all(state: &EventState, commands: Vec<Command>) -> EventState {
    commands.into_iter().fold(state.clone(), |current, command| {
        let result: TransitionResult = apply(&current, command).expect("command applies");
        result.new_state
    })
}

/// A full round robin finishing A, B, C, D.
pub fn create_scored_league() -> EventState {
    let fixtures: [(&str, &str, u32, &str, u32); 6] = [
        ("L1", "A", 2, "B", 0),
        ("L2", "C", 1, "D", 0),
        ("L3", "A", 2, "C", 0),
        ("L4", "B", 1, "D", 0),
        ("L5", "A", 1, "D", 0),
        ("L6", "B", 2, "C", 1),
    ];

    let commands: Vec<Command> = fixtures
        .iter()
        .flat_map(|(id, p1, s1, p2, s2)| {
            [
                assign(id, Side::First, p1),
                assign(id, Side::Second, p2),
                league_score(id, *s1, *s2),
            ]
        })
        .collect();

    apply_all(&create_test_state(), commands)
}

/// The scored league, finalized: semifinal C vs D.
pub fn create_finalized_state() -> EventState {
    apply_all(&create_scored_league(), vec![Command::FinalizeLeague])
}

/// C beats D, then B, then A on penalties; final confirmed.
pub fn create_final_confirmed_state() -> EventState {
    apply_all(&create_finalized_state(), vec![
        knockout_score("T1", 2, 1),
        confirm("T1"),
        knockout_score("T2", 3, 1),
        confirm("T2"),
        knockout_score("T3", 1, 1),
        penalties("T3", 4, 2),
        confirm("T3"),
    ])
}
