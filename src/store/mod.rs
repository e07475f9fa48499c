//! Persistence for tournaments and the host profile.
//!
//! The engine never touches a store; the service loads a tournament, runs the
//! engine and writes the result back through these traits.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{Host, HostId, Tournament, TournamentId};
use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Create with an id that is already stored.
    #[error("Tournament {0} already exists")]
    Duplicate(TournamentId),

    /// Update of a tournament that is not stored.
    #[error("Tournament {0} is not stored")]
    Missing(TournamentId),

    #[error("No host profile stored")]
    MissingHost,

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage of tournament aggregates (players and matches included).
pub trait TournamentStore: Send + Sync {
    fn create(&self, tournament: &Tournament) -> StoreResult<()>;

    fn find_by_id(&self, id: TournamentId) -> StoreResult<Option<Tournament>>;

    /// All tournaments owned by `host_id`, oldest first.
    fn find_by_host(&self, host_id: HostId) -> StoreResult<Vec<Tournament>>;

    fn update(&self, tournament: &Tournament) -> StoreResult<()>;

    /// Remove a tournament with all its players and matches. Unknown ids are ignored.
    fn delete(&self, id: TournamentId) -> StoreResult<()>;
}

/// Storage of the single local host profile.
pub trait HostStore: Send + Sync {
    fn get(&self) -> StoreResult<Option<Host>>;

    fn create(&self, host: &Host) -> StoreResult<()>;

    fn update(&self, host: &Host) -> StoreResult<()>;
}
