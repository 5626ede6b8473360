//! Public serializable view of a game.
//!
//! The snapshot carries every persisted field verbatim plus the derived
//! values the UI renders directly: the current round, whose deal it is, and
//! the leaderboard.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::game::{Game, GameStatus, Player};
use crate::domain::round::Round;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: Uuid,
    pub name: String,
    pub total_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: Uuid,
    pub status: GameStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_accessed: OffsetDateTime,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub current_round: u8,
    pub dealer_index: usize,
    pub standings: Vec<Standing>,
}

/// Project a game into its public view.
pub fn snapshot(game: &Game) -> GameSnapshot {
    let current_round = game.current_round().round_number;
    GameSnapshot {
        id: game.id,
        status: game.status,
        created_at: game.created_at,
        last_accessed: game.last_accessed,
        players: game.players.clone(),
        rounds: game.rounds.rounds().to_vec(),
        current_round,
        dealer_index: game.dealer_index_for(current_round),
        standings: standings(game),
    }
}

/// Players with cumulative totals, highest first; ties keep seat order.
pub fn standings(game: &Game) -> Vec<Standing> {
    let mut rows: Vec<Standing> = game
        .players
        .iter()
        .map(|p| Standing {
            player_id: p.id,
            name: p.name.clone(),
            total_score: game.total_for(p.id),
        })
        .collect();
    rows.sort_by_key(|row| std::cmp::Reverse(row.total_score));
    rows
}
