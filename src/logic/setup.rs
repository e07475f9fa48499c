//! Setup phase: how many Swiss rounds a roster gets.

use crate::models::MIN_PLAYERS;

/// Number of rounds for `players` participants.
///
/// Below the minimum roster there are no rounds; up to 8 players play 3 rounds;
/// larger fields play `ceil(log2(n)) + 1` rounds, never fewer than 4.
pub fn number_of_rounds(players: usize) -> u32 {
    if players < MIN_PLAYERS {
        0
    } else if players <= 8 {
        3
    } else {
        let ceil_log2 = players.next_power_of_two().trailing_zeros();
        (ceil_log2 + 1).max(4)
    }
}
