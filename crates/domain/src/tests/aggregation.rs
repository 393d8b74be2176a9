// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{knockout_result, league_result};
use crate::{
    AggregatedRecord, KnockoutStage, Match, Participant, PhaseFilter, PlayerName, RecordSortKey,
    SortDirection, aggregate_records, head_to_head, sort_records,
};

fn sample_matches() -> Vec<Match> {
    let mut unseeded: Match = Match::knockout("T2", KnockoutStage::Prefinal);
    unseeded.p1 = Participant::player("B");
    unseeded.s1 = Some(2);
    unseeded.s2 = Some(0);

    vec![
        league_result("L1", 1, "A", 2, "B", 1),
        league_result("L2", 1, "C", 0, "D", 0),
        knockout_result("T1", KnockoutStage::Semifinal, "B", 1, "C", 1, Some((4, 3))),
        unseeded,
    ]
}

fn names(records: &[AggregatedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

fn record<'a>(records: &'a [AggregatedRecord], name: &str) -> &'a AggregatedRecord {
    records
        .iter()
        .find(|r| r.name.as_str() == name)
        .expect("record present")
}

#[test]
fn test_all_phases_count_shootout_as_win_and_loss() {
    let matches: Vec<Match> = sample_matches();

    let records: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::All);

    assert_eq!(names(&records), vec!["A", "B", "C", "D"]);

    let b: &AggregatedRecord = record(&records, "B");
    assert_eq!((b.matches, b.wins, b.draws, b.losses), (2, 1, 0, 1));
    assert_eq!((b.gf, b.ga, b.points), (2, 3, 3));

    let c: &AggregatedRecord = record(&records, "C");
    assert_eq!((c.matches, c.wins, c.draws, c.losses), (2, 0, 1, 1));
    assert_eq!(c.points, 1);
}

#[test]
fn test_phase_filters() {
    let matches: Vec<Match> = sample_matches();

    let league: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::League);
    assert_eq!(names(&league), vec!["A", "C", "D", "B"]);

    let knockout: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::Knockout);
    assert_eq!(names(&knockout), vec!["B", "C"]);
    assert_eq!(record(&knockout, "B").wins, 1);
}

#[test]
fn test_unplaced_participants_are_excluded() {
    let matches: Vec<Match> = sample_matches();

    let records: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::Knockout);

    // T2 has a TBD slot and must not count for B
    assert_eq!(record(&records, "B").matches, 1);
    assert!(records.iter().all(|r| r.name.as_str() != "TBD"));
}

#[test]
fn test_unconfirmed_but_scored_matches_count() {
    let mut m: Match = league_result("L1", 1, "A", 3, "B", 0);
    m.completed = false;

    let records: Vec<AggregatedRecord> = aggregate_records(&[m], PhaseFilter::All);

    assert_eq!(record(&records, "A").wins, 1);
}

#[test]
fn test_aggregation_is_idempotent() {
    let matches: Vec<Match> = sample_matches();

    assert_eq!(
        aggregate_records(&matches, PhaseFilter::All),
        aggregate_records(&matches, PhaseFilter::All)
    );
}

#[test]
fn test_win_rate() {
    let matches: Vec<Match> = sample_matches();
    let records: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::All);

    assert!((record(&records, "B").win_rate() - 0.5).abs() < f64::EPSILON);
    assert!((record(&records, "A").win_rate() - 1.0).abs() < f64::EPSILON);
    assert!(record(&records, "D").win_rate().abs() < f64::EPSILON);
}

#[test]
fn test_sort_records_by_column() {
    let matches: Vec<Match> = sample_matches();
    let mut records: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::All);

    sort_records(&mut records, RecordSortKey::Name, SortDirection::Descending);
    assert_eq!(names(&records), vec!["D", "C", "B", "A"]);

    sort_records(&mut records, RecordSortKey::Name, SortDirection::Ascending);
    sort_records(&mut records, RecordSortKey::Losses, SortDirection::Descending);
    assert_eq!(names(&records), vec!["B", "C", "A", "D"]);
}

#[test]
fn test_head_to_head_breakdown() {
    let mut matches: Vec<Match> = sample_matches();
    matches.push(league_result("L9", 4, "C", 2, "B", 0));

    let rivals = head_to_head(&matches, &PlayerName::new("B"), PhaseFilter::All);

    assert_eq!(rivals.len(), 2);
    assert_eq!(rivals[0].opponent.as_str(), "C");
    assert_eq!(
        (rivals[0].played, rivals[0].wins, rivals[0].losses),
        (2, 1, 1)
    );
    assert_eq!((rivals[0].gf, rivals[0].ga), (1, 3));
    assert_eq!(rivals[1].opponent.as_str(), "A");

    let league_only = head_to_head(&matches, &PlayerName::new("B"), PhaseFilter::League);
    assert_eq!(league_only[0].opponent.as_str(), "A");
    assert_eq!(league_only[1].played, 1);
}

#[test]
fn test_huge_scores_saturate_instead_of_overflowing() {
    let matches: Vec<Match> = vec![
        league_result("L1", 1, "A", u32::MAX, "B", 0),
        league_result("L2", 2, "A", 1, "B", 0),
        knockout_result("T1", KnockoutStage::Final, "B", 0, "A", u32::MAX, None),
    ];

    let records: Vec<AggregatedRecord> = aggregate_records(&matches, PhaseFilter::All);
    let a: &AggregatedRecord = record(&records, "A");
    assert_eq!((a.matches, a.wins, a.points), (3, 3, 9));
    assert_eq!(a.gf, u32::MAX);
    assert_eq!(record(&records, "B").ga, u32::MAX);

    let rivals = head_to_head(&matches, &PlayerName::new("A"), PhaseFilter::All);
    assert_eq!(rivals[0].played, 3);
    assert_eq!(rivals[0].gf, u32::MAX);
}
