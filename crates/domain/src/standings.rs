// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League standings computation.
//!
//! Standings are **computed**, never stored. They are a pure function of the
//! roster and the match list.
//!
//! ## Ordering Rules
//!
//! Players are ordered by:
//! 1. Points (highest first)
//! 2. Goal difference (highest first)
//! 3. Head-to-head: the score of the first counted match between the two
//! 4. Goals for (highest first)
//! 5. Roster order
//!
//! ## Invariants
//!
//! - Every roster player gets exactly one standing
//! - Ranks are `1..=N` with no gaps and no shared ranks

use crate::types::{Match, PlayerName, Roster, Side};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

/// One player's row in the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// The player.
    pub name: PlayerName,
    /// Matches counted.
    pub played: u32,
    /// Wins.
    pub won: u32,
    /// Draws.
    pub drawn: u32,
    /// Losses.
    pub lost: u32,
    /// Goals for.
    pub gf: u32,
    /// Goals against.
    pub ga: u32,
    /// Goal difference (`gf - ga`).
    pub gd: i64,
    /// Points.
    pub points: u32,
    /// 1-based table position.
    pub rank: usize,
}

impl Standing {
    /// A zero-filled row for a player with nothing counted yet.
    #[must_use]
    pub const fn empty(name: PlayerName) -> Self {
        Self {
            name,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            gf: 0,
            ga: 0,
            gd: 0,
            points: 0,
            rank: 0,
        }
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.gf = self.gf.saturating_add(scored);
        self.ga = self.ga.saturating_add(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points = self.points.saturating_add(POINTS_FOR_WIN);
            }
            Ordering::Less => self.lost += 1,
            Ordering::Equal => {
                self.drawn += 1;
                self.points = self.points.saturating_add(POINTS_FOR_DRAW);
            }
        }

        self.gd = i64::from(self.gf) - i64::from(self.ga);
    }
}

/// Whether a match counts toward the table of this roster.
fn counts_for(roster: &Roster, m: &Match) -> bool {
    m.completed
        && m.is_score_complete()
        && m.p1.name().is_some_and(|p| roster.contains(p))
        && m.p2.name().is_some_and(|p| roster.contains(p))
}

/// Computes the ranked league table.
///
/// This is a total function: it never fails, and a roster player with no
/// counted matches gets a zero-filled row.
///
/// # Arguments
///
/// * `roster` - The event's players, in roster order
/// * `matches` - Match records; only completed, score-complete matches
///   between two roster players are counted
///
/// # Returns
///
/// One `Standing` per roster player, sorted, with `rank` set to `1..=N`.
#[must_use]
pub fn calculate_standings(roster: &Roster, matches: &[Match]) -> Vec<Standing> {
    let mut table: Vec<Standing> = roster
        .players()
        .iter()
        .cloned()
        .map(Standing::empty)
        .collect();

    let counted: Vec<&Match> = matches.iter().filter(|m| counts_for(roster, m)).collect();

    for m in &counted {
        let (Some(s1), Some(s2)) = (m.s1, m.s2) else {
            continue;
        };
        for (side, scored, conceded) in [(Side::First, s1, s2), (Side::Second, s2, s1)] {
            let Some(name) = m.participant(side).name() else {
                continue;
            };
            if let Some(row) = table.iter_mut().find(|row| &row.name == name) {
                row.record(scored, conceded);
            }
        }
    }

    // Head-to-head makes this comparison non-transitive, so the table is
    // ordered with a stable insertion sort that never relies on a total order.
    for i in 1..table.len() {
        let mut j = i;
        while j > 0
            && compare_standings(&table[j - 1], &table[j], roster, &counted) == Ordering::Greater
        {
            table.swap(j - 1, j);
            j -= 1;
        }
    }

    for (index, row) in table.iter_mut().enumerate() {
        row.rank = index + 1;
    }

    table
}

/// Compares two rows.
///
/// Returns:
/// - `Ordering::Less` if `a` ranks above `b`
/// - `Ordering::Greater` if `b` ranks above `a`
/// - `Ordering::Equal` only when comparing a row with itself
fn compare_standings(
    a: &Standing,
    b: &Standing,
    roster: &Roster,
    counted: &[&Match],
) -> Ordering {
    // 1. Points (highest wins)
    match b.points.cmp(&a.points) {
        Ordering::Equal => {}
        other => return other,
    }

    // 2. Goal difference (highest wins)
    match b.gd.cmp(&a.gd) {
        Ordering::Equal => {}
        other => return other,
    }

    // 3. Head-to-head
    match compare_head_to_head(&a.name, &b.name, counted) {
        Ordering::Equal => {}
        other => return other,
    }

    // 4. Goals for (highest wins)
    match b.gf.cmp(&a.gf) {
        Ordering::Equal => {}
        other => return other,
    }

    // 5. Roster order
    roster.position(&a.name).cmp(&roster.position(&b.name))
}

/// Head-to-head comparison using the first counted match between the two.
///
/// Only a single direct match is inspected; repeated fixtures beyond the
/// first are ignored.
fn compare_head_to_head(a: &PlayerName, b: &PlayerName, counted: &[&Match]) -> Ordering {
    let Some(direct) = counted.iter().find(|m| m.is_between(a, b)) else {
        return Ordering::Equal;
    };

    let score_of = |player: &PlayerName| direct.side_of(player).and_then(|s| direct.score(s));
    match (score_of(a), score_of(b)) {
        (Some(score_a), Some(score_b)) => score_b.cmp(&score_a),
        _ => Ordering::Equal,
    }
}

/// Returns the player holding the given rank, if the table has one.
#[must_use]
pub fn player_at_rank(standings: &[Standing], rank: usize) -> Option<&PlayerName> {
    standings.iter().find(|s| s.rank == rank).map(|s| &s.name)
}
