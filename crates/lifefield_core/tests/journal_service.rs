use lifefield_core::db::{open_db, open_db_in_memory, DbError};
use lifefield_core::{
    JournalService, RepoError, RepoResult, ServiceError, SlotRepository, SqliteSlotRepository,
    StateStore,
};

/// Repository double whose every operation fails, simulating unavailable
/// storage.
struct UnavailableRepo;

impl SlotRepository for UnavailableRepo {
    fn load(&self) -> RepoResult<Option<String>> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }

    fn save(&self, _document: &str) -> RepoResult<()> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }
}

#[test]
fn open_with_empty_slot_starts_from_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::open(SqliteSlotRepository::new(&conn));

    assert_eq!(service.state(), &StateStore::empty());
    assert_eq!(service.draft("snapshot", "evidence"), Some(""));
}

#[test]
fn open_with_corrupt_slot_starts_from_defaults() {
    let conn = open_db_in_memory().unwrap();
    SqliteSlotRepository::new(&conn)
        .save("{definitely not json")
        .unwrap();

    let service = JournalService::open(SqliteSlotRepository::new(&conn));
    assert_eq!(service.state(), &StateStore::empty());
}

#[test]
fn unavailable_storage_degrades_silently() {
    let mut service = JournalService::open(UnavailableRepo);
    assert_eq!(service.state(), &StateStore::empty());

    // Mutations still apply in memory even though every save fails.
    assert!(service.set_text("snapshot", "currentState", "offline"));
    assert_eq!(
        service.value("snapshot", "currentState").unwrap().as_text(),
        Some("offline")
    );
}

#[test]
fn mutations_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifefield.db");

    {
        let conn = open_db(&path).unwrap();
        let mut service = JournalService::open(SqliteSlotRepository::new(&conn));
        service.set_text("idealLife", "narrative", "a quiet studio by the sea");
        service.set_draft("idealLife", "habits", "morning pages");
        assert!(service.add_list_item("idealLife", "habits"));
    }

    let conn = open_db(&path).unwrap();
    let service = JournalService::open(SqliteSlotRepository::new(&conn));
    assert_eq!(
        service.value("idealLife", "narrative").unwrap().as_text(),
        Some("a quiet studio by the sea")
    );
    assert_eq!(
        service.value("idealLife", "habits").unwrap().as_list(),
        Some(&["morning pages".to_string()][..])
    );
    // Drafts are ephemeral and never persisted.
    assert_eq!(service.draft("idealLife", "habits"), Some(""));
}

#[test]
fn add_list_item_commits_draft_and_resets_it() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    service.set_draft("snapshot", "evidence", "Shipped v1");
    assert!(service.add_list_item("snapshot", "evidence"));
    assert_eq!(
        service.value("snapshot", "evidence").unwrap().as_list(),
        Some(&["Shipped v1".to_string()][..])
    );
    assert_eq!(service.draft("snapshot", "evidence"), Some(""));
}

#[test]
fn whitespace_draft_is_a_no_op_and_does_not_write_the_slot() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    service.set_draft("snapshot", "evidence", "   ");
    assert!(!service.add_list_item("snapshot", "evidence"));
    assert_eq!(service.draft("snapshot", "evidence"), Some("   "));
    assert_eq!(SqliteSlotRepository::new(&conn).load().unwrap(), None);
}

#[test]
fn remove_list_item_out_of_range_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    for item in ["A", "B", "C"] {
        service.set_draft("snapshot", "evidence", item);
        service.add_list_item("snapshot", "evidence");
    }

    assert!(service.remove_list_item("snapshot", "evidence", 1));
    assert!(!service.remove_list_item("snapshot", "evidence", 5));
    assert_eq!(
        service.value("snapshot", "evidence").unwrap().as_list(),
        Some(&["A".to_string(), "C".to_string()][..])
    );
}

#[test]
fn export_then_import_round_trips_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    service.set_text("snapshot", "currentState", "steady");
    service.set_draft("creativity", "projects", "field notes zine");
    service.add_list_item("creativity", "projects");
    service.set_draft("creativity", "projects", "synth patch");
    service.add_list_item("creativity", "projects");

    let exported = service.export_json().unwrap();
    let before = service.state().clone();

    let outcome = service.import_text(&exported).unwrap();
    assert!(!outcome.fell_back_to_defaults);
    assert_eq!(service.state(), &before);
}

#[test]
fn export_to_file_writes_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(lifefield_core::EXPORT_FILE_NAME);

    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));
    service.set_text("gapMap", "bridges", "weekly review");
    service.export_to_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains('\n'), "export should be pretty-printed");
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["gapMap"]["bridges"], "weekly review");
}

#[test]
fn import_parse_error_leaves_every_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    service.set_text("snapshot", "currentState", "before import");
    service.set_draft("snapshot", "evidence", "pending entry");
    let before = service.state().clone();

    let err = service.import_text("{not json").unwrap_err();
    assert!(matches!(err, ServiceError::ImportParse(_)));
    assert_eq!(service.state(), &before);
    assert_eq!(service.draft("snapshot", "evidence"), Some("pending entry"));
}

#[test]
fn import_with_mixed_type_list_resets_that_section_only() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    let outcome = service
        .import_text(r#"{"snapshot":{"evidence":["x",42],"currentState":"kept"}}"#)
        .unwrap();
    assert!(!outcome.fell_back_to_defaults);
    assert_eq!(
        service.value("snapshot", "evidence").unwrap().as_list(),
        Some(&[][..])
    );
    assert_eq!(
        service.value("snapshot", "currentState").unwrap().as_text(),
        Some("kept")
    );
}

#[test]
fn import_of_non_object_document_resets_to_defaults_with_flag() {
    let conn = open_db_in_memory().unwrap();
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));
    service.set_text("snapshot", "currentState", "soon gone");

    let outcome = service.import_text("[1,2,3]").unwrap();
    assert!(outcome.fell_back_to_defaults);
    assert_eq!(service.state(), &StateStore::empty());
}
