//! File-backed store: one JSON document per tournament, plus `host.json`.
//!
//! Layout under the data directory:
//! - `tournaments/<id>.json`
//! - `host.json`

use super::{HostStore, StoreError, StoreResult, TournamentStore};
use crate::models::{Host, HostId, Tournament, TournamentId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("tournaments"))?;
        log::info!("Using JSON file store at {}", root.display());
        Ok(Self { root })
    }

    fn tournament_path(&self, id: TournamentId) -> PathBuf {
        self.root.join("tournaments").join(format!("{id}.json"))
    }

    fn host_path(&self) -> PathBuf {
        self.root.join("host.json")
    }
}

/// Read and parse a JSON file; a missing file is `None`.
fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write through a temp file and rename so readers never see a partial document.
fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl TournamentStore for JsonFileStore {
    fn create(&self, tournament: &Tournament) -> StoreResult<()> {
        let path = self.tournament_path(tournament.id);
        if path.exists() {
            return Err(StoreError::Duplicate(tournament.id));
        }
        write_json(&path, tournament)
    }

    fn find_by_id(&self, id: TournamentId) -> StoreResult<Option<Tournament>> {
        read_json(&self.tournament_path(id))
    }

    fn find_by_host(&self, host_id: HostId) -> StoreResult<Vec<Tournament>> {
        let mut found = Vec::new();
        for entry in fs::read_dir(self.root.join("tournaments"))? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(t) = read_json::<Tournament>(&path)? {
                if t.host_id == host_id {
                    found.push(t);
                }
            }
        }
        found.sort_by_key(|t| t.created_at);
        Ok(found)
    }

    fn update(&self, tournament: &Tournament) -> StoreResult<()> {
        let path = self.tournament_path(tournament.id);
        if !path.exists() {
            return Err(StoreError::Missing(tournament.id));
        }
        write_json(&path, tournament)
    }

    fn delete(&self, id: TournamentId) -> StoreResult<()> {
        match fs::remove_file(self.tournament_path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HostStore for JsonFileStore {
    fn get(&self) -> StoreResult<Option<Host>> {
        read_json(&self.host_path())
    }

    fn create(&self, host: &Host) -> StoreResult<()> {
        write_json(&self.host_path(), host)
    }

    fn update(&self, host: &Host) -> StoreResult<()> {
        if !self.host_path().exists() {
            return Err(StoreError::MissingHost);
        }
        write_json(&self.host_path(), host)
    }
}
