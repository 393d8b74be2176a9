// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_event;
use crate::backend::sqlite::initialize_database;
use crate::diesel_schema::archived_events;
use crate::{ArchiveStore, Persistence};
use diesel::SqliteConnection;
use diesel::prelude::*;

#[test]
fn test_initialize_creates_archive_table() {
    let mut conn: SqliteConnection =
        initialize_database("file:memdb_init_schema?mode=memory&cache=shared").unwrap();

    let count: i64 = archived_events::table.count().get_result(&mut conn).unwrap();

    assert_eq!(count, 0);
}

#[test]
fn test_file_database_persists_across_adapters() {
    let path = std::env::temp_dir().join(format!(
        "ladder_cup_archive_test_{}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut store: Persistence = Persistence::new_with_file(&path).unwrap();
        store.append_one(&create_test_event("event-1", 1, "A")).unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.load_all().unwrap().len(), 1);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
}
