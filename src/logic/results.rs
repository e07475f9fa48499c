//! Result processing: credit a finished match (or a bye) to player stats.

use crate::models::{GameMatch, MatchOutcome, Player, PlayerId, Tournament};

/// Apply a finished match's result to both players' stats.
///
/// Byes and unfinished matches leave the tournament unchanged (byes are credited
/// when the round is generated). The match list itself is not touched; see
/// [`apply_match_result`].
pub fn update_player_stats(tournament: &Tournament, game: &GameMatch) -> Tournament {
    let mut next = tournament.clone();
    credit_result(&mut next, game);
    next
}

/// Apply a finished match's result to player stats and store the match
/// (replacing the entry with the same id).
///
/// Does not guard against a match being applied twice: callers must reject
/// matches that are already finished in `tournament`.
pub fn apply_match_result(tournament: &Tournament, game: &GameMatch) -> Tournament {
    let mut next = update_player_stats(tournament, game);
    if let Some(slot) = next.matches.iter_mut().find(|m| m.id == game.id) {
        *slot = game.clone();
    }
    next
}

/// Give `player_id` a bye in `round`: a finished walkover match plus a win worth
/// the tournament's configured win points.
pub(crate) fn grant_bye(tournament: &mut Tournament, round: u32, player_id: PlayerId) {
    tournament
        .matches
        .push(GameMatch::bye(tournament.id, round, player_id));
    let points = tournament.points_for_win;
    with_player(tournament, player_id, |p| {
        p.add_win(points, None);
        log::info!("{} receives a bye in round {}", p.name, round);
    });
}

fn credit_result(tournament: &mut Tournament, game: &GameMatch) {
    if !game.finished {
        return;
    }
    let Some(player_2) = game.player_2 else {
        return;
    };
    let player_1 = game.player_1;
    if tournament.player(player_1).is_none() || tournament.player(player_2).is_none() {
        log::warn!(
            "Match {} references a player outside tournament {}; stats not updated",
            game.id,
            tournament.id
        );
        return;
    }

    let (win, draw, loss) = (
        tournament.points_for_win,
        tournament.points_for_draw,
        tournament.points_for_loss,
    );
    match game.outcome() {
        MatchOutcome::Draw => {
            with_player(tournament, player_1, |p| p.add_draw(draw, player_2));
            with_player(tournament, player_2, |p| p.add_draw(draw, player_1));
        }
        MatchOutcome::PlayerOne => {
            with_player(tournament, player_1, |p| p.add_win(win, Some(player_2)));
            with_player(tournament, player_2, |p| p.add_loss(loss, player_1));
        }
        MatchOutcome::PlayerTwo => {
            with_player(tournament, player_1, |p| p.add_loss(loss, player_2));
            with_player(tournament, player_2, |p| p.add_win(win, Some(player_1)));
        }
        MatchOutcome::Undecided => {
            log::warn!(
                "Unexpected result for match {}: {}-{} with {} draws; scoring as a loss for both",
                game.id,
                game.player_1_wins,
                game.player_2_wins,
                game.draws
            );
            with_player(tournament, player_1, |p| p.add_loss(loss, player_2));
            with_player(tournament, player_2, |p| p.add_loss(loss, player_1));
        }
    }
}

fn with_player(tournament: &mut Tournament, id: PlayerId, f: impl FnOnce(&mut Player)) {
    if let Some(p) = tournament.player_mut(id) {
        f(p);
    }
}
