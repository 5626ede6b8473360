//! Game orchestration: store access, domain mutations, mutation logging.
//!
//! Every method is synchronous and all-or-nothing: the per-game write lock
//! is held for the whole validate-then-apply call, and a domain rejection
//! leaves the stored game untouched. The core never logs its own failures;
//! mutations that commit are logged here.

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::round::StatEntry;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::errors::domain::DomainError;
use crate::store::memory::MemoryStore;

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game from a roster of names and store it.
    pub fn create_game(
        &self,
        store: &MemoryStore,
        names: &[String],
    ) -> Result<GameSnapshot, DomainError> {
        let now = OffsetDateTime::now_utc();
        let game = Game::new(Uuid::new_v4(), names, now)?;
        let snap = snapshot(&game);
        store.insert(game);
        info!(game_id = %snap.id, players = snap.players.len(), "game_created");
        Ok(snap)
    }

    /// Fetch a snapshot, touching `last_accessed` (history orders by it).
    pub fn fetch_game(
        &self,
        store: &MemoryStore,
        game_id: Uuid,
    ) -> Result<GameSnapshot, DomainError> {
        store.update(game_id, |game| {
            game.touch(OffsetDateTime::now_utc());
            Ok(snapshot(game))
        })
    }

    pub fn resolve_round(
        &self,
        store: &MemoryStore,
        game_id: Uuid,
        round_no: u8,
        entries: &[StatEntry],
        kraken_played: bool,
    ) -> Result<GameSnapshot, DomainError> {
        let snap = store.update(game_id, |game| {
            game.resolve_round(round_no, entries, kraken_played)?;
            game.touch(OffsetDateTime::now_utc());
            Ok(snapshot(game))
        })?;
        info!(game_id = %game_id, round = round_no, status = ?snap.status, "round_resolved");
        Ok(snap)
    }

    pub fn edit_round(
        &self,
        store: &MemoryStore,
        game_id: Uuid,
        round_no: u8,
        entries: &[StatEntry],
        kraken_played: bool,
    ) -> Result<GameSnapshot, DomainError> {
        let snap = store.update(game_id, |game| {
            game.edit_round(round_no, entries, kraken_played)?;
            game.touch(OffsetDateTime::now_utc());
            Ok(snapshot(game))
        })?;
        info!(game_id = %game_id, round = round_no, "round_edited");
        Ok(snap)
    }

    pub fn undo_round(
        &self,
        store: &MemoryStore,
        game_id: Uuid,
        round_no: u8,
    ) -> Result<GameSnapshot, DomainError> {
        let snap = store.update(game_id, |game| {
            game.undo_round(round_no)?;
            game.touch(OffsetDateTime::now_utc());
            Ok(snapshot(game))
        })?;
        info!(game_id = %game_id, round = round_no, "round_undone");
        Ok(snap)
    }

    /// Read-only history projection, most recently accessed first.
    pub fn list_history(&self, store: &MemoryStore) -> Vec<GameSnapshot> {
        let mut games = store.list();
        games.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));
        games.iter().map(snapshot).collect()
    }

    pub fn delete_game(&self, store: &MemoryStore, game_id: Uuid) -> Result<(), DomainError> {
        store.remove(game_id)?;
        info!(game_id = %game_id, "game_deleted");
        Ok(())
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
