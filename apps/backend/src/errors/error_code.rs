//! Error codes for the skullboard backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the skullboard backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round sequencing
    /// Resolving or editing a round other than the required one
    OutOfOrderRound,
    /// Undo requested on a non-latest or non-resolved round
    InvalidUndoTarget,

    // Stats validation
    /// Missing, duplicate, or unknown player entries
    IncompleteStats,
    /// Bid or tricks outside the round's card count
    RangeViolation,
    /// Sum of tricks does not match the card count
    TrickCountMismatch,

    // Game creation
    /// Fewer than two players
    RosterTooSmall,
    /// Player name rejected
    InvalidPlayerName,

    // Request validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid round number provided
    InvalidRoundNumber,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Round not found
    RoundNotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfOrderRound => "OUT_OF_ORDER_ROUND",
            Self::InvalidUndoTarget => "INVALID_UNDO_TARGET",
            Self::IncompleteStats => "INCOMPLETE_STATS",
            Self::RangeViolation => "RANGE_VIOLATION",
            Self::TrickCountMismatch => "TRICK_COUNT_MISMATCH",
            Self::RosterTooSmall => "ROSTER_TOO_SMALL",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidRoundNumber => "INVALID_ROUND_NUMBER",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
