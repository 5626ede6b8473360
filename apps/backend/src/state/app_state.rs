use crate::store::memory::MemoryStore;

/// Application state containing shared resources
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Shared game store
    pub store: MemoryStore,
}

impl AppState {
    /// Create a new AppState with the given store
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Create an AppState with a fresh, empty store (tests and local runs)
    pub fn with_empty_store() -> Self {
        Self::new(MemoryStore::new())
    }
}
