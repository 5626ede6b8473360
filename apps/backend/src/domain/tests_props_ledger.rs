//! Property tests for the round ledger (pure domain, no store).
//!
//! Properties tested:
//! - Snapshots are always the running sum of stored round scores
//! - Editing a round back to its previous stats restores the whole ledger
//! - Failed mutations never change the ledger

use proptest::prelude::*;
use uuid::Uuid;

use crate::domain::ledger::RoundLedger;
use crate::domain::round::StatEntry;

fn entry(player_id: Uuid, bid: u8, tricks: u8, bonus: u16) -> StatEntry {
    StatEntry {
        player_id,
        bid,
        tricks,
        bonus,
    }
}

/// Per-round raw material: (tricks split, bid a, bid b, bonus step).
type RoundSeed = (u8, u8, u8, u8);

/// Turn a seed into a valid two-player submission for round `r`.
fn entries_for(r: u8, seed: RoundSeed, a: Uuid, b: Uuid) -> [StatEntry; 2] {
    let (split, bid_a, bid_b, bonus_step) = seed;
    let a_tricks = split % (r + 1);
    let b_tricks = r - a_tricks;
    [
        entry(a, bid_a % (r + 1), a_tricks, u16::from(bonus_step) * 10),
        entry(b, bid_b % (r + 1), b_tricks, 0),
    ]
}

proptest! {
    /// Property: after any prefix of valid resolutions, every snapshot is
    /// the running sum of the per-round scores.
    #[test]
    fn prop_snapshots_are_running_sums(
        seeds in proptest::collection::vec((0u8..=10, 0u8..=10, 0u8..=10, 0u8..=5), 10),
        resolved in 1usize..=10,
    ) {
        let players = [Uuid::new_v4(), Uuid::new_v4()];
        let roster = players.to_vec();
        let mut ledger = RoundLedger::new();

        for r in 1..=resolved as u8 {
            let entries = entries_for(r, seeds[usize::from(r) - 1], players[0], players[1]);
            ledger.resolve_round(r, &entries, false, &roster).unwrap();
        }

        for &player in &players {
            let mut running = 0i32;
            for round in ledger.rounds().iter().take(resolved) {
                let stat = round.stat_for(player).unwrap();
                running += stat.round_score;
                prop_assert_eq!(stat.total_score_snapshot, running);
            }
        }
        prop_assert!(ledger.rounds().iter().skip(resolved).all(|r| !r.is_resolved()));
    }

    /// Property: editing a round with new stats and then editing it back to
    /// the original stats restores the ledger exactly, cascade included.
    #[test]
    fn prop_edit_back_restores_the_ledger(
        seeds in proptest::collection::vec((0u8..=10, 0u8..=10, 0u8..=10, 0u8..=5), 5),
        replacement in (0u8..=10, 0u8..=10, 0u8..=10, 0u8..=5),
        target in 1u8..=5,
    ) {
        let players = [Uuid::new_v4(), Uuid::new_v4()];
        let roster = players.to_vec();
        let mut ledger = RoundLedger::new();

        for r in 1..=5u8 {
            let entries = entries_for(r, seeds[usize::from(r) - 1], players[0], players[1]);
            ledger.resolve_round(r, &entries, false, &roster).unwrap();
        }
        let original = ledger.clone();

        let new_entries = entries_for(target, replacement, players[0], players[1]);
        ledger.edit_round(target, &new_entries, false, &roster).unwrap();

        let old_entries = entries_for(target, seeds[usize::from(target) - 1], players[0], players[1]);
        ledger.edit_round(target, &old_entries, false, &roster).unwrap();

        prop_assert_eq!(ledger, original);
    }

    /// Property: a rejected resolve leaves the ledger byte-for-byte intact.
    #[test]
    fn prop_failed_resolve_mutates_nothing(
        seed in (0u8..=10, 0u8..=10, 0u8..=10, 0u8..=5),
        bogus_round in 2u8..=10,
    ) {
        let players = [Uuid::new_v4(), Uuid::new_v4()];
        let roster = players.to_vec();
        let mut ledger = RoundLedger::new();
        let before = ledger.clone();

        // Round 1 is the only legal target on a fresh ledger.
        let entries = entries_for(bogus_round, seed, players[0], players[1]);
        prop_assert!(ledger.resolve_round(bogus_round, &entries, false, &roster).is_err());
        prop_assert_eq!(ledger, before);
    }
}
