//! Domain layer: pure game logic types and helpers.

pub mod game;
pub mod ledger;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_ledger;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use game::{Game, GameStatus, Player};
pub use ledger::RoundLedger;
pub use round::{PlayerStat, Round, StatEntry};
pub use rules::{card_count_for_round, dealer_index, MAX_ROUNDS, MIN_PLAYERS};
pub use scoring::score_round;
pub use snapshot::{snapshot, standings, GameSnapshot, Standing};
