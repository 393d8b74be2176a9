// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod archive_tests;
mod initialization_tests;

use ladder_cup_domain::{
    ArchivedEvent, KnockoutStage, Match, MatchRole, Participant, PlayerName, Roster, Standing,
    calculate_standings,
};

fn create_test_result(id: &str, p1: &str, s1: u32, p2: &str, s2: u32) -> Match {
    let mut m: Match = Match::league(id, 1);
    m.p1 = Participant::player(p1);
    m.p2 = Participant::player(p2);
    m.s1 = Some(s1);
    m.s2 = Some(s2);
    m.completed = true;
    m
}

/// A small completed event won by `winner` on penalties.
pub fn create_test_event(id: &str, timestamp: i64, winner: &str) -> ArchivedEvent {
    let roster: Roster = Roster::from_names(&["A", "B", "C", "D"]).expect("valid roster");
    let league_matches: Vec<Match> = vec![
        create_test_result("L1", "A", 2, "B", 1),
        create_test_result("L2", "C", 0, "D", 0),
    ];
    let standings: Vec<Standing> = calculate_standings(&roster, &league_matches);

    let mut final_match: Match = Match::knockout("T3", KnockoutStage::Final);
    final_match.p1 = Participant::player(winner);
    final_match.p2 = Participant::player("B");
    final_match.s1 = Some(1);
    final_match.s2 = Some(1);
    final_match.role = MatchRole::Knockout {
        stage: KnockoutStage::Final,
        pk1: Some(5),
        pk2: Some(3),
    };
    final_match.completed = true;

    ArchivedEvent {
        id: id.to_string(),
        timestamp,
        league_matches,
        knockout_matches: vec![final_match],
        standings,
        winner: PlayerName::new(winner),
        players: roster.players().to_vec(),
    }
}
