//! In-memory store: tournaments by id behind a RwLock.

use super::{HostStore, StoreError, StoreResult, TournamentStore};
use crate::models::{Host, HostId, Tournament, TournamentId};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: RwLock<HashMap<TournamentId, Tournament>>,
    host: RwLock<Option<Host>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for MemoryStore {
    fn create(&self, tournament: &Tournament) -> StoreResult<()> {
        let mut g = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        if g.contains_key(&tournament.id) {
            return Err(StoreError::Duplicate(tournament.id));
        }
        g.insert(tournament.id, tournament.clone());
        Ok(())
    }

    fn find_by_id(&self, id: TournamentId) -> StoreResult<Option<Tournament>> {
        let g = self.tournaments.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.get(&id).cloned())
    }

    fn find_by_host(&self, host_id: HostId) -> StoreResult<Vec<Tournament>> {
        let g = self.tournaments.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut found: Vec<Tournament> = g
            .values()
            .filter(|t| t.host_id == host_id)
            .cloned()
            .collect();
        found.sort_by_key(|t| t.created_at);
        Ok(found)
    }

    fn update(&self, tournament: &Tournament) -> StoreResult<()> {
        let mut g = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        match g.get_mut(&tournament.id) {
            Some(entry) => {
                *entry = tournament.clone();
                Ok(())
            }
            None => Err(StoreError::Missing(tournament.id)),
        }
    }

    fn delete(&self, id: TournamentId) -> StoreResult<()> {
        let mut g = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        g.remove(&id);
        Ok(())
    }
}

impl HostStore for MemoryStore {
    fn get(&self) -> StoreResult<Option<Host>> {
        let g = self.host.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.clone())
    }

    fn create(&self, host: &Host) -> StoreResult<()> {
        let mut g = self.host.write().map_err(|_| StoreError::LockPoisoned)?;
        *g = Some(host.clone());
        Ok(())
    }

    fn update(&self, host: &Host) -> StoreResult<()> {
        let mut g = self.host.write().map_err(|_| StoreError::LockPoisoned)?;
        match g.as_mut() {
            Some(current) => {
                *current = host.clone();
                Ok(())
            }
            None => Err(StoreError::MissingHost),
        }
    }
}
