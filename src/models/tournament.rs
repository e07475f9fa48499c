//! Tournament aggregate and TournamentError.

use crate::logic::number_of_rounds;
use crate::models::game::{GameMatch, MatchId};
use crate::models::host::HostId;
use crate::models::player::{Player, PlayerId};
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fewest players a tournament can be authored with.
pub const MIN_PLAYERS: usize = 4;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// No tournament stored under this id.
    #[error("Tournament not found")]
    NotFound(TournamentId),
    #[error("Match not found")]
    MatchNotFound(MatchId),
    #[error("Player not found")]
    PlayerNotFound(PlayerId),
    /// No local host profile exists yet.
    #[error("No host profile found")]
    NoHost,
    #[error("Tournament name must not be empty")]
    EmptyTournamentName,
    #[error("Name must not be empty")]
    EmptyName,
    /// A player with this name already exists (names are unique, case-insensitive).
    #[error("'{0}' is already in the player list")]
    DuplicatePlayerName(String),
    #[error("At least {required} players are needed (currently {actual})")]
    NotEnoughPlayers { required: usize, actual: usize },
    #[error("Tournament has already started")]
    AlreadyStarted,
    /// Not started yet, or already finished.
    #[error("Tournament is not active")]
    NotActive,
    #[error("Tournament is already finished")]
    AlreadyFinished,
    #[error("All {0} rounds have been played")]
    AllRoundsPlayed(u32),
    #[error("Finish all matches of round {0} first")]
    RoundIncomplete(u32),
    #[error("A result for this match has already been reported")]
    ResultAlreadyReported,
    #[error("A bye has no result to report")]
    ByeMatch,
    /// Equal game wins with no draw declared.
    #[error("Invalid result {player_1_wins}-{player_2_wins} with {draws} draws: the match has no winner")]
    InvalidResult { player_1_wins: u32, player_2_wins: u32, draws: u32 },
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for tournament operations.
pub type TournamentResult<T> = Result<T, TournamentError>;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: roster, every match so far, round counter and scoring.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Host who owns the tournament.
    pub host_id: HostId,
    /// Insertion order, unique by id.
    pub players: Vec<Player>,
    /// All rounds' matches; only ever appended to.
    pub matches: Vec<GameMatch>,
    /// 0 until round 1 has been generated.
    pub current_round: u32,
    pub started: bool,
    pub finished: bool,
    pub number_of_rounds: u32,
    pub points_for_win: u32,
    pub points_for_draw: u32,
    pub points_for_loss: u32,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a tournament with no players, not started, default 3/1/0 scoring.
    pub fn new(name: impl Into<String>, host_id: HostId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            host_id,
            players: Vec::new(),
            matches: Vec::new(),
            current_round: 0,
            started: false,
            finished: false,
            number_of_rounds: 0,
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
            created_at: Utc::now(),
        }
    }

    /// Create a tournament and add a player for every name.
    pub fn with_players<I, S>(name: impl Into<String>, host_id: HostId, names: I) -> TournamentResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut t = Self::new(name, host_id);
        for n in names {
            t.add_player(n)?;
        }
        Ok(t)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Players still eligible for pairing, in roster order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Matches of one round, in generation order.
    pub fn round_matches(&self, round: u32) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// True once every real (non-bye) match of `round` has a result.
    pub fn is_round_complete(&self, round: u32) -> bool {
        self.round_matches(round).all(|m| m.is_bye() || m.finished)
    }

    /// Add a player before the tournament starts. Names must be unique (case-insensitive).
    /// Recomputes the number of rounds for the new roster size.
    pub fn add_player(&mut self, name: impl Into<String>) -> TournamentResult<PlayerId> {
        if self.started {
            return Err(TournamentError::AlreadyStarted);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName(name_trimmed.to_string()));
        }
        let player = Player::new(self.id, name_trimmed);
        let id = player.id;
        self.players.push(player);
        self.number_of_rounds = number_of_rounds(self.players.len());
        Ok(id)
    }

    /// Remove a player by id (only before the tournament starts).
    pub fn remove_player(&mut self, player_id: PlayerId) -> TournamentResult<()> {
        if self.started {
            return Err(TournamentError::AlreadyStarted);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        self.number_of_rounds = number_of_rounds(self.players.len());
        Ok(())
    }

    /// Change the scoring weights (only before the tournament starts).
    pub fn set_scoring(&mut self, win: u32, draw: u32, loss: u32) -> TournamentResult<()> {
        if self.started {
            return Err(TournamentError::AlreadyStarted);
        }
        self.points_for_win = win;
        self.points_for_draw = draw;
        self.points_for_loss = loss;
        Ok(())
    }

    /// Exclude a player from all future pairings. Past matches and stats are kept.
    pub fn drop_player(&mut self, player_id: PlayerId) -> TournamentResult<()> {
        if self.finished {
            return Err(TournamentError::AlreadyFinished);
        }
        self.player_mut(player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?
            .drop_out();
        Ok(())
    }
}
