//! Orchestration: load a tournament, run the engine, persist, publish.
//!
//! Every mutating call holds the writer lock for its whole load-compute-save
//! cycle, so at most one mutation is in flight at a time. Each persisted change
//! is published to subscribers as a full tournament snapshot.

use crate::logic::{apply_match_result, generate_first_round, generate_next_round, standings, Standing};
use crate::models::{
    Host, MatchId, MatchOutcome, PlayerId, Tournament, TournamentError, TournamentId,
    TournamentResult, MIN_PLAYERS,
};
use crate::store::{HostStore, MemoryStore, StoreError, TournamentStore};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;

/// Snapshots buffered per subscriber before it starts lagging.
const UPDATE_CHANNEL_CAPACITY: usize = 64;

/// Points awarded per match outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self { win: 3, draw: 1, loss: 0 }
    }
}

/// Everything needed to author a tournament.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTournament {
    pub name: String,
    pub players: Vec<String>,
    #[serde(default)]
    pub scoring: Scoring,
}

/// A reported best-of-3 result.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MatchReport {
    pub player_1_wins: u32,
    pub player_2_wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub reported_by: Option<PlayerId>,
}

pub struct TournamentService {
    tournaments: Arc<dyn TournamentStore>,
    hosts: Arc<dyn HostStore>,
    writer: Mutex<()>,
    updates: broadcast::Sender<Tournament>,
}

impl TournamentService {
    pub fn new(tournaments: Arc<dyn TournamentStore>, hosts: Arc<dyn HostStore>) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            tournaments,
            hosts,
            writer: Mutex::new(()),
            updates,
        }
    }

    /// Service over a fresh [`MemoryStore`] for both tournaments and host.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }

    /// Receive every tournament snapshot persisted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Tournament> {
        self.updates.subscribe()
    }

    fn lock(&self) -> TournamentResult<MutexGuard<'_, ()>> {
        self.writer
            .lock()
            .map_err(|_| TournamentError::Store(StoreError::LockPoisoned))
    }

    fn load(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.tournaments
            .find_by_id(id)?
            .ok_or(TournamentError::NotFound(id))
    }

    fn publish(&self, tournament: &Tournament) {
        if self.updates.send(tournament.clone()).is_err() {
            log::trace!("Tournament {} updated with no subscribers", tournament.id);
        }
    }

    fn save(&self, tournament: &Tournament) -> TournamentResult<()> {
        self.tournaments.update(tournament)?;
        self.publish(tournament);
        Ok(())
    }

    /// The local host profile, created with a random name on first use.
    pub fn current_host(&self) -> TournamentResult<Host> {
        let _guard = self.lock()?;
        if let Some(host) = self.hosts.get()? {
            return Ok(host);
        }
        let host = Host::with_random_name();
        self.hosts.create(&host)?;
        log::info!("Created host profile '{}' ({})", host.name, host.id);
        Ok(host)
    }

    pub fn rename_host(&self, name: &str) -> TournamentResult<Host> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let _guard = self.lock()?;
        let mut host = self.hosts.get()?.ok_or(TournamentError::NoHost)?;
        host.name = name.to_string();
        self.hosts.update(&host)?;
        Ok(host)
    }

    /// Author and store a tournament for the current host. It is not started.
    pub fn create_tournament(&self, draft: NewTournament) -> TournamentResult<Tournament> {
        let _guard = self.lock()?;
        let host = self.hosts.get()?.ok_or(TournamentError::NoHost)?;
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyTournamentName);
        }
        let mut tournament = Tournament::with_players(name, host.id, draft.players)?;
        if tournament.players.len() < MIN_PLAYERS {
            return Err(TournamentError::NotEnoughPlayers {
                required: MIN_PLAYERS,
                actual: tournament.players.len(),
            });
        }
        let Scoring { win, draw, loss } = draft.scoring;
        tournament.set_scoring(win, draw, loss)?;

        self.tournaments.create(&tournament)?;
        self.publish(&tournament);
        log::info!(
            "Created tournament '{}' ({}) with {} players over {} rounds",
            tournament.name,
            tournament.id,
            tournament.players.len(),
            tournament.number_of_rounds
        );
        Ok(tournament)
    }

    pub fn tournament(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.load(id)
    }

    /// Tournaments owned by the current host, oldest first.
    pub fn tournaments_for_host(&self) -> TournamentResult<Vec<Tournament>> {
        let host = self.hosts.get()?.ok_or(TournamentError::NoHost)?;
        Ok(self.tournaments.find_by_host(host.id)?)
    }

    pub fn delete_tournament(&self, id: TournamentId) -> TournamentResult<()> {
        let _guard = self.lock()?;
        self.load(id)?;
        self.tournaments.delete(id)?;
        log::info!("Deleted tournament {}", id);
        Ok(())
    }

    /// Start the tournament and pair round 1.
    pub fn start_tournament(&self, id: TournamentId) -> TournamentResult<Tournament> {
        let _guard = self.lock()?;
        let tournament = self.load(id)?;
        if tournament.started {
            return Err(TournamentError::AlreadyStarted);
        }
        let next = generate_first_round(&tournament);
        self.save(&next)?;
        Ok(next)
    }

    /// Pair the next round.
    ///
    /// When every round has been played the tournament is stored as finished and
    /// `AllRoundsPlayed` is reported.
    pub fn advance_round(&self, id: TournamentId) -> TournamentResult<Tournament> {
        let _guard = self.lock()?;
        let tournament = self.load(id)?;
        if !tournament.started || tournament.finished {
            return Err(TournamentError::NotActive);
        }
        if tournament.current_round >= tournament.number_of_rounds {
            self.save(&generate_next_round(&tournament))?;
            return Err(TournamentError::AllRoundsPlayed(tournament.number_of_rounds));
        }
        if !tournament.is_round_complete(tournament.current_round) {
            return Err(TournamentError::RoundIncomplete(tournament.current_round));
        }
        let next = generate_next_round(&tournament);
        self.save(&next)?;
        Ok(next)
    }

    /// Record a match result and credit it to both players. Each match takes
    /// exactly one result; byes take none.
    pub fn submit_result(
        &self,
        id: TournamentId,
        match_id: MatchId,
        report: MatchReport,
    ) -> TournamentResult<Tournament> {
        let _guard = self.lock()?;
        let tournament = self.load(id)?;
        if !tournament.started {
            return Err(TournamentError::NotActive);
        }
        let game = tournament
            .get_match(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        if game.is_bye() {
            return Err(TournamentError::ByeMatch);
        }
        if game.finished {
            return Err(TournamentError::ResultAlreadyReported);
        }
        if let Some(reporter) = report.reported_by {
            if !game.involves(reporter) {
                return Err(TournamentError::PlayerNotFound(reporter));
            }
        }

        let reported = game.with_result(
            report.player_1_wins,
            report.player_2_wins,
            report.draws,
            report.reported_by,
        );
        if reported.outcome() == MatchOutcome::Undecided {
            return Err(TournamentError::InvalidResult {
                player_1_wins: report.player_1_wins,
                player_2_wins: report.player_2_wins,
                draws: report.draws,
            });
        }

        let next = apply_match_result(&tournament, &reported);
        self.save(&next)?;
        Ok(next)
    }

    /// Withdraw a player from future rounds.
    pub fn drop_player(&self, id: TournamentId, player_id: PlayerId) -> TournamentResult<Tournament> {
        let _guard = self.lock()?;
        let mut tournament = self.load(id)?;
        tournament.drop_player(player_id)?;
        self.save(&tournament)?;
        log::info!("Player {} dropped from tournament {}", player_id, id);
        Ok(tournament)
    }

    pub fn standings(&self, id: TournamentId) -> TournamentResult<Vec<Standing>> {
        Ok(standings(&self.load(id)?))
    }
}
