use lifefield_core::db::{open_db, open_db_in_memory};
use lifefield_core::{SlotRepository, SqliteSlotRepository};

#[test]
fn load_returns_none_for_never_written_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    assert_eq!(repo.load().unwrap(), None);
}

#[test]
fn save_then_load_round_trips_the_document() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    repo.save(r#"{"snapshot":{"currentState":"ok"}}"#).unwrap();
    assert_eq!(
        repo.load().unwrap().as_deref(),
        Some(r#"{"snapshot":{"currentState":"ok"}}"#)
    );
}

#[test]
fn save_fully_overwrites_prior_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    repo.save("{\"a\":1}").unwrap();
    repo.save("{}").unwrap();
    assert_eq!(repo.load().unwrap().as_deref(), Some("{}"));
}

#[test]
fn slot_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifefield.db");

    {
        let conn = open_db(&path).unwrap();
        SqliteSlotRepository::new(&conn).save("{}").unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(
        SqliteSlotRepository::new(&conn).load().unwrap().as_deref(),
        Some("{}")
    );
}
