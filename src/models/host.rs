//! The local host profile that owns tournaments.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a host.
pub type HostId = Uuid;

/// Names handed out to a freshly created host profile.
const HOST_NAMES: [&str; 10] = [
    "Nexus Hub",
    "Orion Gateway",
    "Sirius Port",
    "Nova Station",
    "Celestial Spire",
    "Cosmic Anchor",
    "Stardust Relay",
    "Galactic Core",
    "Quantum Link",
    "Void Beacon",
];

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: HostId,
    pub name: String,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// A new host with one of the built-in placeholder names.
    pub fn with_random_name() -> Self {
        let name = HOST_NAMES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(HOST_NAMES[0]);
        Self::new(name)
    }
}
