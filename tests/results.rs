//! Integration tests for result processing: points, counters and opponent history.

use swiss_tournament_web::{
    apply_match_result, generate_first_round, generate_next_round, update_player_stats, GameMatch,
    Player, Tournament,
};
use uuid::Uuid;

/// A started 4-player tournament with round 1 paired as (A vs B), (C vs D).
fn started_tournament() -> Tournament {
    let t = Tournament::with_players("Test Tournament", Uuid::new_v4(), ["A", "B", "C", "D"]).unwrap();
    generate_first_round(&t)
}

fn by_name<'a>(t: &'a Tournament, name: &str) -> &'a Player {
    t.players.iter().find(|p| p.name == name).unwrap()
}

fn first_match(t: &Tournament) -> GameMatch {
    t.matches[0].clone()
}

fn assert_counters_consistent(p: &Player) {
    assert_eq!(
        p.matches_played,
        p.matches_won + p.matches_lost + p.matches_drawn,
        "{}",
        p.name
    );
}

#[test]
fn two_nil_win_credits_winner_and_loser() {
    let t = started_tournament();
    let t = apply_match_result(&t, &first_match(&t).with_result(2, 0, 0, None));

    let a = by_name(&t, "A");
    assert_eq!(a.score, 3);
    assert_eq!((a.matches_played, a.matches_won, a.matches_lost), (1, 1, 0));
    let b = by_name(&t, "B");
    assert_eq!(b.score, 0);
    assert_eq!((b.matches_played, b.matches_won, b.matches_lost), (1, 0, 1));
}

#[test]
fn player_two_can_win_two_one() {
    let t = started_tournament();
    let t = apply_match_result(&t, &first_match(&t).with_result(1, 2, 0, None));
    assert_eq!(by_name(&t, "A").matches_lost, 1);
    assert_eq!(by_name(&t, "B").matches_won, 1);
    assert_eq!(by_name(&t, "B").score, 3);
}

#[test]
fn declared_draw_credits_both_players() {
    let t = started_tournament();
    let t = apply_match_result(&t, &first_match(&t).with_result(1, 1, 1, None));
    for name in ["A", "B"] {
        let p = by_name(&t, name);
        assert_eq!(p.score, 1);
        assert_eq!(p.matches_drawn, 1);
        assert_counters_consistent(p);
    }
}

#[test]
fn draws_take_precedence_over_game_wins() {
    let t = started_tournament();
    let t = apply_match_result(&t, &first_match(&t).with_result(2, 0, 1, None));
    assert_eq!(by_name(&t, "A").matches_drawn, 1);
    assert_eq!(by_name(&t, "B").matches_drawn, 1);
}

#[test]
fn undecided_result_scores_a_loss_for_both() {
    let t = started_tournament();
    let t = apply_match_result(&t, &first_match(&t).with_result(1, 1, 0, None));
    for name in ["A", "B"] {
        let p = by_name(&t, name);
        assert_eq!(p.score, t.points_for_loss);
        assert_eq!(p.matches_lost, 1);
        assert_eq!(p.matches_played, 1);
        assert_counters_consistent(p);
    }
}

#[test]
fn custom_scoring_is_applied() {
    let mut t = Tournament::with_players("Custom", Uuid::new_v4(), ["A", "B", "C", "D"]).unwrap();
    t.set_scoring(2, 1, 1).unwrap();
    let t = generate_first_round(&t);
    let t = apply_match_result(&t, &first_match(&t).with_result(2, 0, 0, None));
    assert_eq!(by_name(&t, "A").score, 2);
    assert_eq!(by_name(&t, "B").score, 1);
}

#[test]
fn opponents_are_appended_to_history() {
    let t = started_tournament();
    let (a, b) = (by_name(&t, "A").id, by_name(&t, "B").id);
    let t = apply_match_result(&t, &first_match(&t).with_result(2, 0, 0, None));
    assert_eq!(by_name(&t, "A").opponent_history, vec![b]);
    assert_eq!(by_name(&t, "B").opponent_history, vec![a]);
    assert!(by_name(&t, "C").opponent_history.is_empty());
}

#[test]
fn apply_replaces_the_stored_match() {
    let t = started_tournament();
    let reported = first_match(&t).with_result(2, 1, 0, Some(by_name(&t, "A").id));
    let t = apply_match_result(&t, &reported);

    assert_eq!(t.matches.len(), 2);
    let stored = t.get_match(reported.id).unwrap();
    assert_eq!(stored, &reported);
    assert!(stored.finished);
}

#[test]
fn update_player_stats_leaves_matches_alone() {
    let t = started_tournament();
    let reported = first_match(&t).with_result(2, 0, 0, None);
    let after = update_player_stats(&t, &reported);
    assert_eq!(after.matches, t.matches);
    assert_eq!(by_name(&after, "A").score, 3);
}

#[test]
fn unfinished_matches_and_byes_change_nothing() {
    let t = started_tournament();
    let open = first_match(&t);
    assert_eq!(update_player_stats(&t, &open), t);

    let bye = GameMatch::bye(t.id, 1, by_name(&t, "C").id);
    assert_eq!(update_player_stats(&t, &bye), t);
}

#[test]
fn counters_stay_consistent_across_a_full_odd_tournament() {
    let mut t = Tournament::with_players("Odd", Uuid::new_v4(), ["A", "B", "C", "D", "E"]).unwrap();
    t = generate_first_round(&t);
    loop {
        let open: Vec<GameMatch> = t
            .round_matches(t.current_round)
            .filter(|m| !m.finished)
            .cloned()
            .collect();
        for (i, m) in open.iter().enumerate() {
            let reported = match i % 3 {
                0 => m.with_result(2, 0, 0, None),
                1 => m.with_result(1, 1, 1, None),
                _ => m.with_result(0, 2, 0, None),
            };
            t = apply_match_result(&t, &reported);
        }
        if t.finished {
            break;
        }
        t = generate_next_round(&t);
    }

    assert_eq!(t.current_round, t.number_of_rounds);
    for p in &t.players {
        assert_counters_consistent(p);
        // Five players over three rounds: everyone plays or sits out every round
        assert_eq!(p.matches_played, 3);
    }
    let total_points: u32 = t.players.iter().map(|p| p.score).sum();
    assert!(total_points > 0);
}
