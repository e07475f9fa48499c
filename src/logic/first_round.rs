//! Round 1: pair the roster in name order.

use crate::logic::results::grant_bye;
use crate::models::{GameMatch, Player, Tournament};

/// Generate round 1 and mark the tournament started.
///
/// 1. Filter to non-dropped players.
/// 2. Fewer than 2: started at round 1 with no matches (any earlier ones are cleared).
/// 3. Sort by name (no ranking data exists yet) and pair neighbours.
/// 4. Odd count: the last player in name order gets a bye, credited immediately.
///
/// Returns a new tournament; the input is left untouched.
pub fn generate_first_round(tournament: &Tournament) -> Tournament {
    if tournament.started {
        log::warn!(
            "Generating round 1 for tournament {} which has already started",
            tournament.id
        );
    }

    let mut next = tournament.clone();
    next.started = true;
    next.current_round = 1;
    // Rosters below the usual minimum still get the round being generated
    next.number_of_rounds = next.number_of_rounds.max(1);

    let mut active: Vec<&Player> = tournament.active_players().collect();
    if active.len() < 2 {
        next.matches.clear();
        log::info!(
            "Tournament {} started with {} active player(s); no matches generated",
            tournament.id,
            active.len()
        );
        return next;
    }

    active.sort_by(|a, b| a.name.cmp(&b.name));

    let pairs = active.chunks_exact(2);
    let unpaired = pairs.remainder().first().map(|p| p.id);
    next.matches.extend(
        pairs.map(|pair| GameMatch::new(tournament.id, 1, pair[0].id, pair[1].id)),
    );

    if let Some(player_id) = unpaired {
        grant_bye(&mut next, 1, player_id);
    }

    log::info!(
        "Tournament {}: round 1 generated with {} match(es)",
        tournament.id,
        next.round_matches(1).count()
    );
    next
}
