//! Data structures for a Swiss tournament: host, players, matches, tournament.

mod game;
mod host;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, MatchOutcome, GAMES_TO_WIN};
pub use host::{Host, HostId};
pub use player::{Player, PlayerId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentResult, MIN_PLAYERS};
