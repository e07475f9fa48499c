//! Integration tests for round 1: name-order pairing and byes.

use std::collections::HashSet;
use swiss_tournament_web::{generate_first_round, Tournament, GAMES_TO_WIN};
use uuid::Uuid;

fn tournament_with_players(names: &[&str]) -> Tournament {
    Tournament::with_players("Test Tournament", Uuid::new_v4(), names.iter().copied()).unwrap()
}

fn numbered_players(n: usize) -> Tournament {
    let names: Vec<String> = (1..=n).map(|i| format!("P{i:02}")).collect();
    Tournament::with_players("Test Tournament", Uuid::new_v4(), names).unwrap()
}

fn player_id(t: &Tournament, name: &str) -> Uuid {
    t.players.iter().find(|p| p.name == name).unwrap().id
}

#[test]
fn match_count_follows_player_parity() {
    for n in 2..=11 {
        let t = generate_first_round(&numbered_players(n));
        let real = t.matches.iter().filter(|m| !m.is_bye()).count();
        let byes = t.matches.iter().filter(|m| m.is_bye()).count();
        assert_eq!(real, n / 2, "{n} players");
        assert_eq!(byes, n % 2, "{n} players");
        assert_eq!(t.matches.len(), n.div_ceil(2), "{n} players");
        assert!(t.matches.iter().all(|m| m.round == 1));
    }
}

#[test]
fn pairs_neighbours_in_name_order() {
    let t = tournament_with_players(&["P3", "P1", "P4", "P2"]);
    let t = generate_first_round(&t);

    assert!(t.started);
    assert!(!t.finished);
    assert_eq!(t.current_round, 1);
    assert_eq!(t.matches.len(), 2);
    assert_eq!(t.matches[0].player_1, player_id(&t, "P1"));
    assert_eq!(t.matches[0].player_2, Some(player_id(&t, "P2")));
    assert_eq!(t.matches[1].player_1, player_id(&t, "P3"));
    assert_eq!(t.matches[1].player_2, Some(player_id(&t, "P4")));
    for m in &t.matches {
        assert!(!m.finished);
        assert_eq!((m.player_1_wins, m.player_2_wins, m.draws), (0, 0, 0));
    }
}

#[test]
fn odd_roster_gives_last_name_a_credited_bye() {
    let t = generate_first_round(&tournament_with_players(&["Carol", "Alice", "Bob"]));
    let carol = player_id(&t, "Carol");

    assert_eq!(t.current_round, 1);
    assert!(t.current_round <= t.number_of_rounds);
    assert!(!t.finished);
    assert_eq!(t.matches.len(), 2);
    let bye = t.matches.iter().find(|m| m.is_bye()).unwrap();
    assert_eq!(bye.player_1, carol);
    assert!(bye.finished);
    assert_eq!(bye.player_1_wins, GAMES_TO_WIN);

    let p = t.player(carol).unwrap();
    assert_eq!(p.score, t.points_for_win);
    assert_eq!(p.matches_won, 1);
    assert_eq!(p.matches_played, 1);
    assert!(p.opponent_history.is_empty());
}

#[test]
fn bye_uses_configured_win_points() {
    let mut t = tournament_with_players(&["A", "B", "C", "D", "E"]);
    t.set_scoring(5, 2, 1).unwrap();
    let t = generate_first_round(&t);
    assert_eq!(t.player(player_id(&t, "E")).unwrap().score, 5);
}

#[test]
fn dropped_players_are_not_paired() {
    let mut t = tournament_with_players(&["A", "B", "C", "D"]);
    let b = player_id(&t, "B");
    t.drop_player(b).unwrap();

    let t = generate_first_round(&t);
    assert!(t.matches.iter().all(|m| !m.involves(b)));
    // A-C pair, D gets the bye
    assert_eq!(t.matches.len(), 2);
    let bye = t.matches.iter().find(|m| m.is_bye()).unwrap();
    assert_eq!(bye.player_1, player_id(&t, "D"));
}

#[test]
fn fewer_than_two_active_players_starts_without_matches() {
    let t = generate_first_round(&tournament_with_players(&["Solo"]));
    assert!(t.started);
    assert_eq!(t.current_round, 1);
    assert!(t.matches.is_empty());
    assert!(t.current_round <= t.number_of_rounds);
    assert_eq!(t.players[0].score, 0);
}

#[test]
fn small_rosters_get_at_least_the_opening_round() {
    for n in 1..=3 {
        let t = generate_first_round(&numbered_players(n));
        assert_eq!(t.number_of_rounds, 1, "{n} players");
        assert!(t.current_round <= t.number_of_rounds, "{n} players");
    }
    // Regular rosters keep their derived count
    assert_eq!(generate_first_round(&numbered_players(4)).number_of_rounds, 3);
}

#[test]
fn degenerate_round_one_clears_earlier_matches() {
    let mut t = generate_first_round(&tournament_with_players(&["A", "B", "C", "D"]));
    assert_eq!(t.matches.len(), 2);
    for name in ["B", "C", "D"] {
        let id = player_id(&t, name);
        t.drop_player(id).unwrap();
    }
    let t = generate_first_round(&t);
    assert!(t.matches.is_empty());
    assert_eq!(t.current_round, 1);
}

#[test]
fn no_player_appears_twice_in_round_one() {
    let t = generate_first_round(&numbered_players(9));
    let mut seen = HashSet::new();
    for m in &t.matches {
        assert!(seen.insert(m.player_1));
        if let Some(p2) = m.player_2 {
            assert!(seen.insert(p2));
        }
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn input_tournament_is_not_modified() {
    let before = tournament_with_players(&["A", "B", "C"]);
    let snapshot = before.clone();
    let after = generate_first_round(&before);
    assert_eq!(before, snapshot);
    assert_ne!(before, after);
}
