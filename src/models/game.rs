//! Match (game) between two players, or a bye for one.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Games a player needs to take a best-of-3 match; a bye is recorded as this many wins.
pub const GAMES_TO_WIN: u32 = 2;

/// How a finished match was decided.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    PlayerOne,
    PlayerTwo,
    Draw,
    /// Equal game wins and no draws: not a valid best-of-3 result.
    Undecided,
}

/// A single match of one round. `player_2 == None` marks a bye for `player_1`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// 1-based round this match belongs to.
    pub round: u32,
    pub player_1: PlayerId,
    pub player_2: Option<PlayerId>,
    pub player_1_wins: u32,
    pub player_2_wins: u32,
    pub draws: u32,
    pub finished: bool,
    pub reported_by: Option<PlayerId>,
}

impl GameMatch {
    /// A new, unplayed pairing.
    pub fn new(tournament_id: TournamentId, round: u32, player_1: PlayerId, player_2: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            player_1,
            player_2: Some(player_2),
            player_1_wins: 0,
            player_2_wins: 0,
            draws: 0,
            finished: false,
            reported_by: None,
        }
    }

    /// A bye: already finished, recorded as a 2-0 walkover for `player`.
    pub fn bye(tournament_id: TournamentId, round: u32, player: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            player_1: player,
            player_2: None,
            player_1_wins: GAMES_TO_WIN,
            player_2_wins: 0,
            draws: 0,
            finished: true,
            reported_by: None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_2.is_none()
    }

    /// True if `player` sits on either side of this match.
    pub fn involves(&self, player: PlayerId) -> bool {
        self.player_1 == player || self.player_2 == Some(player)
    }

    /// True if this match put `a` and `b` against each other, in either order.
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player_1 == a && self.player_2 == Some(b)) || (self.player_1 == b && self.player_2 == Some(a))
    }

    /// Decide the match from its game counts. Draws take precedence over game wins.
    pub fn outcome(&self) -> MatchOutcome {
        if self.draws > 0 {
            MatchOutcome::Draw
        } else if self.player_1_wins > self.player_2_wins {
            MatchOutcome::PlayerOne
        } else if self.player_2_wins > self.player_1_wins {
            MatchOutcome::PlayerTwo
        } else {
            MatchOutcome::Undecided
        }
    }

    /// Copy of this match carrying a reported result, marked finished.
    pub fn with_result(&self, player_1_wins: u32, player_2_wins: u32, draws: u32, reported_by: Option<PlayerId>) -> Self {
        Self {
            player_1_wins,
            player_2_wins,
            draws,
            finished: true,
            reported_by,
            ..self.clone()
        }
    }
}
