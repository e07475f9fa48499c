//! Leaderboard view of a tournament.

use crate::models::{PlayerId, Tournament};
use serde::{Deserialize, Serialize};

/// One leaderboard row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based; players on equal score share a rank.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub score: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_drawn: u32,
    pub matches_lost: u32,
    pub dropped: bool,
}

/// All players by score, highest first. Equal scores keep roster order.
pub fn standings(tournament: &Tournament) -> Vec<Standing> {
    let mut players: Vec<_> = tournament.players.iter().collect();
    players.sort_by(|a, b| b.score.cmp(&a.score));

    let mut rows: Vec<Standing> = Vec::with_capacity(players.len());
    for (i, p) in players.into_iter().enumerate() {
        let rank = match rows.last() {
            Some(prev) if prev.score == p.score => prev.rank,
            _ => i + 1,
        };
        rows.push(Standing {
            rank,
            player_id: p.id,
            name: p.name.clone(),
            score: p.score,
            matches_played: p.matches_played,
            matches_won: p.matches_won,
            matches_drawn: p.matches_drawn,
            matches_lost: p.matches_lost,
            dropped: p.dropped,
        });
    }
    rows
}

/// Leaderboard as CSV with a header row.
pub fn standings_csv(tournament: &Tournament) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in standings(tournament) {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
