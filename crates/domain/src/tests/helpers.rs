// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{KnockoutStage, Match, MatchRole, Participant, Roster};

pub fn create_test_roster() -> Roster {
    Roster::from_names(&["A", "B", "C", "D"]).expect("valid roster")
}

/// A completed league fixture.
pub fn league_result(id: &str, round: u32, p1: &str, s1: u32, p2: &str, s2: u32) -> Match {
    let mut m: Match = Match::league(id, round);
    m.p1 = Participant::player(p1);
    m.p2 = Participant::player(p2);
    m.s1 = Some(s1);
    m.s2 = Some(s2);
    m.completed = true;
    m
}

/// A league fixture with players but no score.
pub fn league_fixture(id: &str, round: u32, p1: &str, p2: &str) -> Match {
    let mut m: Match = Match::league(id, round);
    m.p1 = Participant::player(p1);
    m.p2 = Participant::player(p2);
    m
}

/// A confirmed knockout match.
pub fn knockout_result(
    id: &str,
    stage: KnockoutStage,
    p1: &str,
    s1: u32,
    p2: &str,
    s2: u32,
    penalties: Option<(u32, u32)>,
) -> Match {
    let mut m: Match = Match::knockout(id, stage);
    m.p1 = Participant::player(p1);
    m.p2 = Participant::player(p2);
    m.s1 = Some(s1);
    m.s2 = Some(s2);
    m.completed = true;
    m.role = MatchRole::Knockout {
        stage,
        pk1: penalties.map(|(pk1, _)| pk1),
        pk2: penalties.map(|(_, pk2)| pk2),
    };
    m
}
