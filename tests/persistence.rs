use garden_core::{AppConfig, OrganismCatalog, Session, StateStore};
use garden_data::{EntryKind, FinanceEntry};
use garden_io::{load_state, FileStore};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

fn temp_save() -> PathBuf {
    std::env::temp_dir().join(format!("pixel_garden_test_{}.json", Uuid::new_v4()))
}

fn open(path: &PathBuf) -> Session<FileStore> {
    let mut config = AppConfig::default();
    config.garden.seed = Some(1);
    Session::open(&config, OrganismCatalog::builtin(), FileStore::new(path))
}

#[test]
fn test_session_survives_restart() {
    let path = temp_save();
    {
        let mut session = open(&path);
        session.purchase("cactus").unwrap();
        session.water(0).unwrap();
        session.add_entry(FinanceEntry::new(
            EntryKind::Earning,
            "Salary",
            "Job",
            1500.0,
            "Monthly",
        ));
        session.toggle_dark();
    }

    let session = open(&path);
    assert_eq!(session.coins(), 30 - 20 + 1);
    assert_eq!(session.plant(0).unwrap().organism_id, "cactus");
    assert_eq!(session.plant(0).unwrap().age, 1);
    assert_eq!(session.book().len(), 1);
    assert!(session.settings().dark);

    let _ = fs::remove_file(path);
}

#[test]
fn test_save_file_is_versioned_json() {
    let path = temp_save();
    let mut session = open(&path);
    session.purchase("sprout").unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["state"]["coins"], 20);
    assert_eq!(json["state"]["garden"][0]["organism_id"], "sprout");
    assert!(json["state"]["garden"][1].is_null());

    let _ = fs::remove_file(path);
}

#[test]
fn test_malformed_save_starts_fresh() {
    let path = temp_save();
    fs::write(&path, "{ this is not a save").unwrap();

    let session = open(&path);
    assert_eq!(session.coins(), 30);
    assert_eq!(session.snapshot().occupied_count(), 0);

    let _ = fs::remove_file(path);
}

#[test]
fn test_saved_garden_is_resized_to_config() {
    let path = temp_save();
    fs::write(
        &path,
        r#"{"coins": 9, "garden": [{"organism_id": "bloom", "health": 250, "hunger": 40, "age": 3, "level": 0, "acquired_at": "2024-01-01T00:00:00Z"}]}"#,
    )
    .unwrap();

    let session = open(&path);
    assert_eq!(session.garden().state().slot_count(), 3);
    let plant = session.plant(0).unwrap();
    assert_eq!(plant.health, 100);
    assert_eq!(plant.level, 1);
    assert_eq!(session.coins(), 9);

    let _ = fs::remove_file(path);
}

#[test]
fn test_unwritable_store_keeps_playing() {
    let dir = std::env::temp_dir().join(format!("pixel_garden_dir_{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    // The save path is a directory, so every write fails.
    let store = FileStore::new(&dir);
    assert!(store.save(&garden_data::SaveState::fresh(3, 1)).is_err());

    let mut session = Session::open(&AppConfig::default(), OrganismCatalog::builtin(), store);
    session.purchase("sprout").unwrap();
    assert_eq!(session.coins(), 20);
    assert_eq!(session.metrics().save_failures(), 1);
    assert!(load_state(&dir).is_err());

    let _ = fs::remove_dir_all(dir);
}
