//! Swiss pairing and standings engine. Every function takes a tournament
//! snapshot and returns a new one; nothing here does I/O.

mod first_round;
mod next_round;
mod results;
mod setup;
mod standings;

pub use first_round::generate_first_round;
pub use next_round::{generate_next_round, has_played_against};
pub use results::{apply_match_result, update_player_stats};
pub use setup::number_of_rounds;
pub use standings::{standings, standings_csv, Standing};
