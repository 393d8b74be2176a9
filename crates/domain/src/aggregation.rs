// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifetime statistics over archived matches.
//!
//! A match counts as soon as both scores are present, whatever its
//! `completed` flag says.

use crate::outcome::resolve_outcome;
use crate::types::{Match, Phase, PlayerName, Side};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

/// Which matches an aggregate view includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseFilter {
    /// League and knockout.
    #[default]
    All,
    /// League only.
    League,
    /// Knockout only.
    Knockout,
}

impl PhaseFilter {
    /// Whether a match of the given phase passes this filter.
    #[must_use]
    pub const fn admits(self, phase: Phase) -> bool {
        matches!(
            (self, phase),
            (Self::All, _) | (Self::League, Phase::League) | (Self::Knockout, Phase::Knockout)
        )
    }
}

/// A player's lifetime tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// The player.
    pub name: PlayerName,
    /// Matches counted.
    pub matches: u32,
    /// Wins (including shoot-out wins).
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses.
    pub losses: u32,
    /// Goals for.
    pub gf: u32,
    /// Goals against.
    pub ga: u32,
    /// Points: 3 per win, 1 per draw.
    pub points: u32,
}

impl AggregatedRecord {
    const fn empty(name: PlayerName) -> Self {
        Self {
            name,
            matches: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            gf: 0,
            ga: 0,
            points: 0,
        }
    }

    /// Share of matches won, `0.0` when nothing has been played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.matches)
    }

    fn record(&mut self, scored: u32, conceded: u32, won: Option<bool>) {
        self.matches += 1;
        self.gf = self.gf.saturating_add(scored);
        self.ga = self.ga.saturating_add(conceded);
        match won {
            Some(true) => {
                self.wins += 1;
                self.points = self.points.saturating_add(POINTS_FOR_WIN);
            }
            Some(false) => self.losses += 1,
            None => {
                self.draws += 1;
                self.points = self.points.saturating_add(POINTS_FOR_DRAW);
            }
        }
    }
}

/// Computes lifetime records from a flat collection of matches.
///
/// # Arguments
///
/// * `matches` - Matches from any number of events
/// * `filter` - Which phases to include
///
/// # Returns
///
/// One record per player seen, sorted by points then goals for (both
/// descending). Remaining ties keep first-seen order.
#[must_use]
pub fn aggregate_records<'a, I>(matches: I, filter: PhaseFilter) -> Vec<AggregatedRecord>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut records: Vec<AggregatedRecord> = Vec::new();
    let mut index: HashMap<PlayerName, usize> = HashMap::new();

    for m in matches {
        if !filter.admits(m.phase()) {
            continue;
        }
        let Some(outcome) = resolve_outcome(m) else {
            continue;
        };
        let (Some(p1), Some(p2), Some(s1), Some(s2)) = (m.p1.name(), m.p2.name(), m.s1, m.s2)
        else {
            continue;
        };

        for (name, side, scored, conceded) in
            [(p1, Side::First, s1, s2), (p2, Side::Second, s2, s1)]
        {
            let slot = *index.entry(name.clone()).or_insert_with(|| {
                records.push(AggregatedRecord::empty(name.clone()));
                records.len() - 1
            });
            records[slot].record(scored, conceded, outcome.won_by(side));
        }
    }

    records.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| b.gf.cmp(&a.gf)));
    records
}

/// Column an aggregated table can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSortKey {
    /// Player name.
    Name,
    /// Matches played.
    Matches,
    /// Wins.
    Wins,
    /// Draws.
    Draws,
    /// Losses.
    Losses,
    /// Goals for.
    GoalsFor,
    /// Goals against.
    GoalsAgainst,
    /// Wins per match.
    WinRate,
    /// Points.
    #[default]
    Points,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

/// Re-sorts records on one column. The sort is stable.
pub fn sort_records(
    records: &mut [AggregatedRecord],
    key: RecordSortKey,
    direction: SortDirection,
) {
    records.sort_by(|a, b| {
        let ordering: Ordering = match key {
            RecordSortKey::Name => a.name.cmp(&b.name),
            RecordSortKey::Matches => a.matches.cmp(&b.matches),
            RecordSortKey::Wins => a.wins.cmp(&b.wins),
            RecordSortKey::Draws => a.draws.cmp(&b.draws),
            RecordSortKey::Losses => a.losses.cmp(&b.losses),
            RecordSortKey::GoalsFor => a.gf.cmp(&b.gf),
            RecordSortKey::GoalsAgainst => a.ga.cmp(&b.ga),
            RecordSortKey::WinRate => a.win_rate().total_cmp(&b.win_rate()),
            RecordSortKey::Points => a.points.cmp(&b.points),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
