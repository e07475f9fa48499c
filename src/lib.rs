//! Swiss tournament organizer: library with models, pairing engine, stores and service.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use logic::{
    apply_match_result, generate_first_round, generate_next_round, has_played_against,
    number_of_rounds, standings, standings_csv, update_player_stats, Standing,
};
pub use models::{
    GameMatch, Host, HostId, MatchId, MatchOutcome, Player, PlayerId, Tournament, TournamentError,
    TournamentId, TournamentResult, GAMES_TO_WIN, MIN_PLAYERS,
};
pub use service::{MatchReport, NewTournament, Scoring, TournamentService};
pub use store::{HostStore, JsonFileStore, MemoryStore, StoreError, TournamentStore};
