//! Integration tests for the memory and JSON file stores.

use chrono::Duration;
use swiss_tournament_web::{
    generate_first_round, Host, HostStore, JsonFileStore, MemoryStore, StoreError, Tournament,
    TournamentStore,
};
use tempfile::tempdir;
use uuid::Uuid;

fn sample_tournament(host_id: Uuid, name: &str) -> Tournament {
    Tournament::with_players(name, host_id, ["Ann", "Ben", "Cat"]).unwrap()
}

/// The tournament contract every store must satisfy.
fn exercise_tournament_store(store: &dyn TournamentStore) {
    let host = Uuid::new_v4();
    let other_host = Uuid::new_v4();

    let older = sample_tournament(host, "Older");
    let mut newer = sample_tournament(host, "Newer");
    newer.created_at = older.created_at + Duration::seconds(5);
    let foreign = sample_tournament(other_host, "Foreign");

    store.create(&newer).unwrap();
    store.create(&older).unwrap();
    store.create(&foreign).unwrap();
    assert!(matches!(store.create(&older), Err(StoreError::Duplicate(_))));

    assert_eq!(store.find_by_id(older.id).unwrap(), Some(older.clone()));
    assert_eq!(store.find_by_id(Uuid::new_v4()).unwrap(), None);

    let names: Vec<String> = store
        .find_by_host(host)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Older", "Newer"]);

    // Players and matches travel with the aggregate
    let started = generate_first_round(&older);
    store.update(&started).unwrap();
    let loaded = store.find_by_id(older.id).unwrap().unwrap();
    assert_eq!(loaded, started);
    assert_eq!(loaded.matches.len(), 2);

    let unknown = sample_tournament(host, "Unknown");
    assert!(matches!(store.update(&unknown), Err(StoreError::Missing(_))));

    store.delete(older.id).unwrap();
    assert_eq!(store.find_by_id(older.id).unwrap(), None);
    store.delete(older.id).unwrap();
    assert_eq!(store.find_by_host(host).unwrap().len(), 1);
    assert_eq!(store.find_by_host(other_host).unwrap().len(), 1);
}

fn exercise_host_store(store: &dyn HostStore) {
    assert_eq!(store.get().unwrap(), None);
    let host = Host::new("Nova Station");
    assert!(matches!(store.update(&host), Err(StoreError::MissingHost)));

    store.create(&host).unwrap();
    assert_eq!(store.get().unwrap(), Some(host.clone()));

    let renamed = Host {
        name: "Renamed".to_string(),
        ..host
    };
    store.update(&renamed).unwrap();
    assert_eq!(store.get().unwrap(), Some(renamed));
}

#[test]
fn memory_store_keeps_tournaments() {
    exercise_tournament_store(&MemoryStore::new());
}

#[test]
fn memory_store_keeps_the_host() {
    exercise_host_store(&MemoryStore::new());
}

#[test]
fn json_store_keeps_tournaments() {
    let dir = tempdir().unwrap();
    exercise_tournament_store(&JsonFileStore::open(dir.path()).unwrap());
}

#[test]
fn json_store_keeps_the_host() {
    let dir = tempdir().unwrap();
    exercise_host_store(&JsonFileStore::open(dir.path()).unwrap());
}

#[test]
fn json_store_survives_reopening() {
    let dir = tempdir().unwrap();
    // A nested directory that does not exist yet
    let data_dir = dir.path().join("data");
    let host = Host::new("Orion Gateway");
    let t = sample_tournament(host.id, "Persistent");
    {
        let store = JsonFileStore::open(&data_dir).unwrap();
        HostStore::create(&store, &host).unwrap();
        TournamentStore::create(&store, &t).unwrap();
    }
    let reopened = JsonFileStore::open(&data_dir).unwrap();
    assert_eq!(HostStore::get(&reopened).unwrap(), Some(host));
    assert_eq!(reopened.find_by_id(t.id).unwrap(), Some(t));
}
