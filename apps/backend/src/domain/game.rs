//! The game aggregate: fixed roster, round ledger, and overall status.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::domain::ledger::RoundLedger;
use crate::domain::round::{Round, StatEntry};
use crate::domain::rules::{dealer_index, MIN_PLAYERS};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub seat_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Active,
    Completed,
}

/// One tracked game: roster fixed at creation, ten rounds, derived status.
///
/// Mutated only through `resolve_round`, `edit_round`, and `undo_round`;
/// each either fully applies or rejects with the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub players: Vec<Player>,
    pub rounds: RoundLedger,
    pub status: GameStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_accessed: OffsetDateTime,
}

impl Game {
    /// Create a game with the given roster, all ten rounds open.
    pub fn new(id: Uuid, names: &[String], now: OffsetDateTime) -> Result<Self, DomainError> {
        if names.len() < MIN_PLAYERS {
            return Err(DomainError::RosterTooSmall { got: names.len() });
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(seat_index, raw)| {
                Ok(Player {
                    id: Uuid::new_v4(),
                    name: normalize_player_name(raw)?,
                    seat_index,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            id,
            players,
            rounds: RoundLedger::new(),
            status: GameStatus::Active,
            created_at: now,
            last_accessed: now,
        })
    }

    pub fn resolve_round(
        &mut self,
        round_no: u8,
        entries: &[StatEntry],
        kraken_played: bool,
    ) -> Result<(), DomainError> {
        let roster = self.roster_ids();
        self.rounds
            .resolve_round(round_no, entries, kraken_played, &roster)?;
        self.refresh_status();
        Ok(())
    }

    pub fn edit_round(
        &mut self,
        round_no: u8,
        entries: &[StatEntry],
        kraken_played: bool,
    ) -> Result<(), DomainError> {
        let roster = self.roster_ids();
        self.rounds
            .edit_round(round_no, entries, kraken_played, &roster)?;
        self.refresh_status();
        Ok(())
    }

    pub fn undo_round(&mut self, round_no: u8) -> Result<(), DomainError> {
        self.rounds.undo_round(round_no)?;
        self.refresh_status();
        Ok(())
    }

    /// The round callers should present next (lowest open, else the tenth).
    pub fn current_round(&self) -> &Round {
        self.rounds.current_round()
    }

    /// Seat whose deal it is for the given round. Presentational only.
    pub fn dealer_index_for(&self, round_no: u8) -> usize {
        dealer_index(round_no, self.players.len())
    }

    /// Cumulative total for a player as of the latest resolved round.
    pub fn total_for(&self, player_id: Uuid) -> i32 {
        self.rounds.total_for(player_id)
    }

    pub fn touch(&mut self, now: OffsetDateTime) {
        self.last_accessed = now;
    }

    fn roster_ids(&self) -> Vec<Uuid> {
        self.players.iter().map(|p| p.id).collect()
    }

    // COMPLETED iff round 10 is resolved; undoing round 10 reverts it.
    fn refresh_status(&mut self) {
        self.status = if self.rounds.is_complete() {
            GameStatus::Completed
        } else {
            GameStatus::Active
        };
    }
}

fn normalize_player_name(raw: &str) -> Result<String, DomainError> {
    let name: String = raw.nfc().collect::<String>().trim().to_string();
    if name.is_empty() {
        return Err(DomainError::invalid_player_name(
            "name is empty after trimming",
        ));
    }
    Ok(name)
}
