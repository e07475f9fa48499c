//! Player data structure and its running stats.

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub score: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub matches_drawn: u32,
    /// Dropped players are never paired again but keep their stats.
    pub dropped: bool,
    /// Opponents faced, in order.
    pub opponent_history: Vec<PlayerId>,
}

impl Player {
    /// Create a new player with the given name. Stats start at zero.
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
            score: 0,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            matches_drawn: 0,
            dropped: false,
            opponent_history: Vec::new(),
        }
    }

    /// Eligible for pairing.
    pub fn is_active(&self) -> bool {
        !self.dropped
    }

    /// Record a won match worth `points`. `opponent` is None for a bye.
    pub fn add_win(&mut self, points: u32, opponent: Option<PlayerId>) {
        self.score += points;
        self.matches_won += 1;
        self.record_played(opponent);
    }

    /// Record a lost match worth `points`.
    pub fn add_loss(&mut self, points: u32, opponent: PlayerId) {
        self.score += points;
        self.matches_lost += 1;
        self.record_played(Some(opponent));
    }

    /// Record a drawn match worth `points`.
    pub fn add_draw(&mut self, points: u32, opponent: PlayerId) {
        self.score += points;
        self.matches_drawn += 1;
        self.record_played(Some(opponent));
    }

    /// Exclude the player from future pairings.
    pub fn drop_out(&mut self) {
        self.dropped = true;
    }

    fn record_played(&mut self, opponent: Option<PlayerId>) {
        self.matches_played += 1;
        if let Some(id) = opponent {
            self.opponent_history.push(id);
        }
    }
}
