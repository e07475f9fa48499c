//! Rounds 2+: Swiss pairing by score with rematch avoidance.

use crate::logic::results::grant_bye;
use crate::models::{GameMatch, Player, PlayerId, Tournament};

/// True if `a` and `b` met in any of `matches`, in either seat order.
pub fn has_played_against(a: PlayerId, b: PlayerId, matches: &[GameMatch]) -> bool {
    matches.iter().any(|m| m.is_between(a, b))
}

/// Generate the next round's pairings.
///
/// Returns the input unchanged when the tournament is not active or the current
/// round still has unfinished matches. Once every round has been played it only
/// marks the tournament finished. Otherwise:
///
/// 1. Fewer than 2 active players: advance the round and finish, no matches.
/// 2. Sort active players by score, highest first (stable, no tie-break).
/// 3. Take the top unpaired player and pair them with the first remaining player
///    they have not met yet; if everyone left is a rematch, take the next one anyway.
/// 4. A leftover player gets a bye, credited immediately.
/// 5. The tournament is finished when the new round is the last one.
pub fn generate_next_round(tournament: &Tournament) -> Tournament {
    if !tournament.started || tournament.finished {
        log::debug!(
            "Tournament {}: cannot generate next round (started={}, finished={})",
            tournament.id,
            tournament.started,
            tournament.finished
        );
        return tournament.clone();
    }
    if tournament.current_round >= tournament.number_of_rounds {
        log::info!(
            "Tournament {}: all {} rounds played, marking finished",
            tournament.id,
            tournament.number_of_rounds
        );
        let mut next = tournament.clone();
        next.finished = true;
        return next;
    }
    if !tournament.is_round_complete(tournament.current_round) {
        log::warn!(
            "Tournament {}: round {} still has unfinished matches",
            tournament.id,
            tournament.current_round
        );
        return tournament.clone();
    }

    let round = tournament.current_round + 1;
    let mut next = tournament.clone();
    next.current_round = round;

    let mut to_pair: Vec<&Player> = tournament.active_players().collect();
    if to_pair.len() < 2 {
        log::info!(
            "Tournament {}: fewer than 2 active players, finishing at round {}",
            tournament.id,
            round
        );
        next.finished = true;
        return next;
    }

    to_pair.sort_by(|a, b| b.score.cmp(&a.score));

    while to_pair.len() >= 2 {
        let player_1 = to_pair.remove(0);
        let opponent = to_pair
            .iter()
            .position(|c| !has_played_against(player_1.id, c.id, &tournament.matches))
            .unwrap_or_else(|| {
                log::info!(
                    "Rematch: {} vs {} in round {}",
                    player_1.name,
                    to_pair[0].name,
                    round
                );
                0
            });
        let player_2 = to_pair.remove(opponent);
        next.matches
            .push(GameMatch::new(tournament.id, round, player_1.id, player_2.id));
    }

    if let Some(leftover) = to_pair.pop() {
        grant_bye(&mut next, round, leftover.id);
    }

    next.finished = round >= tournament.number_of_rounds;
    log::info!(
        "Tournament {}: round {} generated with {} match(es){}",
        tournament.id,
        round,
        next.round_matches(round).count(),
        if next.finished { " (final round)" } else { "" }
    );
    next
}
