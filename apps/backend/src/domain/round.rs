//! Per-round records: the round container, stored stats, and stat input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One player's recorded outcome for a resolved round.
///
/// `round_score` and `total_score_snapshot` are derived by the ledger;
/// everything else is caller input. Stats are stored in roster (seat) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player_id: Uuid,
    pub bid: u8,
    pub tricks_won: u8,
    pub bonus_points: u16,
    pub round_score: i32,
    pub total_score_snapshot: i32,
}

/// Caller-supplied stats for one player, as submitted over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub player_id: Uuid,
    pub bid: u8,
    pub tricks: u8,
    #[serde(default)]
    pub bonus: u16,
}

/// One of the ten rounds of a game.
///
/// A round with empty `player_stats` is open; a resolved round holds exactly
/// one stat per player. There is no in-between state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u8,
    /// Always equals `round_number`; kept explicit so score math never leans
    /// on positional indexing.
    pub card_count: u8,
    pub kraken_played: bool,
    pub player_stats: Vec<PlayerStat>,
}

impl Round {
    pub(crate) fn open(round_number: u8) -> Self {
        Self {
            round_number,
            card_count: round_number,
            kraken_played: false,
            player_stats: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.player_stats.is_empty()
    }

    pub fn stat_for(&self, player_id: Uuid) -> Option<&PlayerStat> {
        self.player_stats.iter().find(|s| s.player_id == player_id)
    }
}
