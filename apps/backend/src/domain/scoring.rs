//! Pure score derivation for a single player's round.

/// Score a bid/tricks/bonus triple for a round dealing `card_count` cards.
///
/// `card_count` equals the 1-based round number, so the zero-bid stake grows
/// as the game progresses:
///
/// - zero bid: `+10 * card_count` on exactly zero tricks, `-10 * card_count`
///   otherwise; the bonus never applies to a zero bid.
/// - exact non-zero bid: `20 * bid + bonus`.
/// - missed non-zero bid: `-10 * |bid - tricks|`; a caller-supplied bonus is
///   discarded, not an error.
///
/// Total and deterministic for all inputs. Range checks against the card
/// count belong to the ledger, not here.
pub fn score_round(bid: u8, tricks: u8, card_count: u8, bonus: u16) -> i32 {
    if bid == 0 {
        let stake = 10 * i32::from(card_count);
        return if tricks == 0 { stake } else { -stake };
    }

    if bid == tricks {
        20 * i32::from(bid) + i32::from(bonus)
    } else {
        -10 * (i32::from(bid) - i32::from(tricks)).abs()
    }
}
