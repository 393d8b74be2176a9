// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_event;
use crate::{ArchiveStore, Persistence, PersistenceError};
use ladder_cup_domain::{ArchivedEvent, PhaseFilter, aggregate_records, matches_from_archive};

#[test]
fn test_new_archive_is_empty() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();

    assert!(store.load_all().unwrap().is_empty());
    assert!(store.list_summaries().unwrap().is_empty());
}

#[test]
fn test_appended_event_loads_back_unchanged() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();
    let event: ArchivedEvent = create_test_event("event-1", 1_760_000_000_000, "A");

    store.append_one(&event).unwrap();

    assert_eq!(store.load_all().unwrap(), vec![event.clone()]);
    assert_eq!(store.get_event("event-1").unwrap(), event);
}

#[test]
fn test_events_load_oldest_first() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();
    store.append_one(&create_test_event("late", 300, "A")).unwrap();
    store.append_one(&create_test_event("early", 100, "C")).unwrap();
    store.append_one(&create_test_event("middle", 200, "A")).unwrap();

    let ids: Vec<String> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids, vec!["early", "middle", "late"]);
}

#[test]
fn test_duplicate_event_id_is_rejected() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();
    store.append_one(&create_test_event("event-1", 100, "A")).unwrap();

    let result = store.append_one(&create_test_event("event-1", 200, "C"));

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateEvent(String::from("event-1")))
    );
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn test_missing_event_is_reported() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(
        store.get_event("nope"),
        Err(PersistenceError::EventNotFound(String::from("nope")))
    );
}

#[test]
fn test_summaries_skip_payload() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();
    store.append_one(&create_test_event("event-1", 100, "C")).unwrap();

    let summaries = store.list_summaries().unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].event_id, "event-1");
    assert_eq!(summaries[0].recorded_at, 100);
    assert_eq!(summaries[0].champion, "C");
    assert_eq!(summaries[0].player_count, 4);
}

#[test]
fn test_loaded_events_feed_aggregation() {
    let mut store: Persistence = Persistence::new_in_memory().unwrap();
    store.append_one(&create_test_event("e1", 1, "A")).unwrap();
    store.append_one(&create_test_event("e2", 2, "A")).unwrap();

    let events: Vec<ArchivedEvent> = store.load_all().unwrap();
    let knockout = aggregate_records(matches_from_archive(&events), PhaseFilter::Knockout);

    assert_eq!(knockout[0].name.as_str(), "A");
    assert_eq!(knockout[0].wins, 2);
    assert_eq!(knockout[1].losses, 2);
}

#[test]
fn test_in_memory_stores_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first.append_one(&create_test_event("event-1", 1, "A")).unwrap();

    assert!(second.load_all().unwrap().is_empty());
}
