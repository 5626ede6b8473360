use std::ops::RangeInclusive;

pub const MAX_ROUNDS: u8 = 10;
pub const MIN_PLAYERS: usize = 2;

// Card schedule: one card in round 1, one more each round, ten in round 10.
pub fn card_count_for_round(round_no: u8) -> Option<u8> {
    if round_no == 0 || round_no > MAX_ROUNDS {
        return None;
    }
    Some(round_no)
}

/// Both bids and tricks won must fall inside this range for a round.
pub fn valid_stat_range(card_count: u8) -> RangeInclusive<u8> {
    0..=card_count
}

/// Seat of the dealer for a 1-based round number.
///
/// Round 1 → seat 0, round 2 → seat 1, wrapping around the table.
pub fn dealer_index(round_no: u8, player_count: usize) -> usize {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    debug_assert!(player_count > 0, "a game always has players");
    (usize::from(round_no) - 1) % player_count
}
