//! In-memory game store with per-game single-writer locking.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::errors::domain::DomainError;

/// Shared map of games, each behind its own lock.
///
/// Mutations take the per-game write lock for the whole validate-then-apply
/// call, so there is one logical writer per game. Readers clone under the
/// read lock and therefore observe a state that existed at a single point in
/// time, never a half-applied cascade.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    games: Arc<DashMap<Uuid, Arc<RwLock<Game>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, game: Game) {
        self.games.insert(game.id, Arc::new(RwLock::new(game)));
    }

    pub fn read<T>(&self, id: Uuid, f: impl FnOnce(&Game) -> T) -> Result<T, DomainError> {
        let slot = self.slot(id)?;
        let game = slot.read();
        Ok(f(&game))
    }

    pub fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Game) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let slot = self.slot(id)?;
        let mut game = slot.write();
        f(&mut game)
    }

    pub fn remove(&self, id: Uuid) -> Result<(), DomainError> {
        self.games
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::GameNotFound(id))
    }

    /// Point-in-time clones of every stored game, in arbitrary order.
    pub fn list(&self) -> Vec<Game> {
        // Collect the slots first so no map shard is held across a lock.
        let slots: Vec<Arc<RwLock<Game>>> =
            self.games.iter().map(|entry| entry.value().clone()).collect();
        slots.iter().map(|slot| slot.read().clone()).collect()
    }

    fn slot(&self, id: Uuid) -> Result<Arc<RwLock<Game>>, DomainError> {
        self.games
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(DomainError::GameNotFound(id))
    }
}
