//! The round ledger: owns one game's ten rounds and every derived score.
//!
//! All three mutations validate fully before touching any round, so a failed
//! call leaves the ledger exactly as it was. Rounds resolve strictly in
//! order, which keeps the resolved prefix contiguous and makes the snapshot
//! of round `r` a plain running sum over rounds `1..=r`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::round::{PlayerStat, Round, StatEntry};
use crate::domain::rules::{card_count_for_round, valid_stat_range, MAX_ROUNDS};
use crate::domain::scoring::score_round;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundLedger {
    rounds: Vec<Round>,
}

impl RoundLedger {
    /// Ten open rounds, numbered 1..=10.
    pub fn new() -> Self {
        Self {
            rounds: (1..=MAX_ROUNDS).map(Round::open).collect(),
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, round_no: u8) -> Option<&Round> {
        self.index_of(round_no).ok().map(|i| &self.rounds[i])
    }

    /// Lowest-numbered open round, or `None` once all ten are resolved.
    pub fn next_open(&self) -> Option<u8> {
        self.rounds
            .iter()
            .find(|r| !r.is_resolved())
            .map(|r| r.round_number)
    }

    /// Highest-numbered resolved round, or `None` before round 1 resolves.
    pub fn latest_resolved(&self) -> Option<u8> {
        self.rounds
            .iter()
            .rev()
            .find(|r| r.is_resolved())
            .map(|r| r.round_number)
    }

    /// The round callers should present next: the lowest open round, or the
    /// terminal tenth round once everything is resolved.
    pub fn current_round(&self) -> &Round {
        self.rounds
            .iter()
            .find(|r| !r.is_resolved())
            .unwrap_or_else(|| &self.rounds[usize::from(MAX_ROUNDS) - 1])
    }

    pub fn is_complete(&self) -> bool {
        self.rounds[usize::from(MAX_ROUNDS) - 1].is_resolved()
    }

    /// Cumulative total for a player: the snapshot stored at the latest
    /// resolved round, or zero before any round resolves.
    pub fn total_for(&self, player_id: Uuid) -> i32 {
        self.latest_resolved()
            .and_then(|n| self.round(n))
            .and_then(|r| r.stat_for(player_id))
            .map(|s| s.total_score_snapshot)
            .unwrap_or(0)
    }

    /// Resolve the next open round with one stat entry per roster player.
    ///
    /// Rejects without mutation unless `round_no` is the lowest open round,
    /// the entries cover the roster exactly, every bid and trick count lies
    /// in `[0, card_count]`, and the trick total equals the card count (or
    /// `kraken_played` bypasses that check).
    pub fn resolve_round(
        &mut self,
        round_no: u8,
        entries: &[StatEntry],
        kraken_played: bool,
        roster: &[Uuid],
    ) -> Result<(), DomainError> {
        let idx = self.index_of(round_no)?;

        let expected = self.next_open();
        if expected != Some(round_no) {
            return Err(DomainError::OutOfOrderRound {
                requested: round_no,
                expected,
            });
        }

        let stats = build_stats(&self.rounds[idx], entries, kraken_played, roster)?;

        let round = &mut self.rounds[idx];
        round.kraken_played = kraken_played;
        round.player_stats = stats;
        self.recompute_snapshots_from(idx);
        Ok(())
    }

    /// Rewrite an already-resolved round and cascade the running totals.
    ///
    /// The target may be any resolved round. Validation matches
    /// `resolve_round`; afterwards the snapshots of this and every later
    /// resolved round are recomputed in ascending order. Later rounds keep
    /// their stored `round_score`; only the running totals shift.
    pub fn edit_round(
        &mut self,
        round_no: u8,
        entries: &[StatEntry],
        kraken_played: bool,
        roster: &[Uuid],
    ) -> Result<(), DomainError> {
        let idx = self.index_of(round_no)?;

        if !self.rounds[idx].is_resolved() {
            return Err(DomainError::OutOfOrderRound {
                requested: round_no,
                expected: self.next_open(),
            });
        }

        let stats = build_stats(&self.rounds[idx], entries, kraken_played, roster)?;

        let round = &mut self.rounds[idx];
        round.kraken_played = kraken_played;
        round.player_stats = stats;
        self.recompute_snapshots_from(idx);
        Ok(())
    }

    /// Reopen the latest resolved round.
    ///
    /// Undo is a stack pop: only the latest resolved round may be cleared,
    /// which keeps the resolved prefix contiguous. Earlier snapshots are
    /// untouched.
    pub fn undo_round(&mut self, round_no: u8) -> Result<(), DomainError> {
        let idx = self.index_of(round_no)?;

        let latest = self.latest_resolved();
        if latest != Some(round_no) {
            return Err(DomainError::InvalidUndoTarget {
                requested: round_no,
                latest,
            });
        }

        let round = &mut self.rounds[idx];
        round.player_stats.clear();
        round.kraken_played = false;
        Ok(())
    }

    fn index_of(&self, round_no: u8) -> Result<usize, DomainError> {
        card_count_for_round(round_no).ok_or(DomainError::RoundNotFound(round_no))?;
        Ok(usize::from(round_no) - 1)
    }

    /// Rebuild `total_score_snapshot` for the resolved rounds starting at
    /// `start_idx`, each as the previous round's snapshot plus the stored
    /// `round_score`. Stats are in roster order in every resolved round, so
    /// positions line up across rounds.
    fn recompute_snapshots_from(&mut self, start_idx: usize) {
        let mut running: Vec<i32> = if start_idx == 0 {
            vec![0; self.rounds[0].player_stats.len()]
        } else {
            self.rounds[start_idx - 1]
                .player_stats
                .iter()
                .map(|s| s.total_score_snapshot)
                .collect()
        };

        for round in self.rounds[start_idx..].iter_mut() {
            if !round.is_resolved() {
                break;
            }
            for (stat, total) in round.player_stats.iter_mut().zip(running.iter_mut()) {
                *total += stat.round_score;
                stat.total_score_snapshot = *total;
            }
        }
    }
}

impl Default for RoundLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate one submission against a round and roster and derive the stats.
///
/// Returns stats in roster order with `total_score_snapshot` left at zero;
/// the ledger fills the running totals in afterwards.
fn build_stats(
    round: &Round,
    entries: &[StatEntry],
    kraken_played: bool,
    roster: &[Uuid],
) -> Result<Vec<PlayerStat>, DomainError> {
    if entries.len() != roster.len() {
        return Err(DomainError::incomplete_stats(format!(
            "expected {} entries, got {}",
            roster.len(),
            entries.len()
        )));
    }

    for entry in entries {
        if !roster.contains(&entry.player_id) {
            return Err(DomainError::incomplete_stats(format!(
                "player {} is not in this game",
                entry.player_id
            )));
        }
    }

    let mut picked: Vec<StatEntry> = Vec::with_capacity(roster.len());
    for &player_id in roster {
        let mut matches = entries.iter().filter(|e| e.player_id == player_id);
        let entry = matches.next().ok_or_else(|| {
            DomainError::incomplete_stats(format!("missing entry for player {player_id}"))
        })?;
        if matches.next().is_some() {
            return Err(DomainError::incomplete_stats(format!(
                "duplicate entry for player {player_id}"
            )));
        }
        picked.push(*entry);
    }

    let range = valid_stat_range(round.card_count);
    for entry in &picked {
        if !range.contains(&entry.bid) {
            return Err(DomainError::range_violation(format!(
                "bid {} outside 0..={} for player {}",
                entry.bid, round.card_count, entry.player_id
            )));
        }
        if !range.contains(&entry.tricks) {
            return Err(DomainError::range_violation(format!(
                "tricks {} outside 0..={} for player {}",
                entry.tricks, round.card_count, entry.player_id
            )));
        }
    }

    // The kraken can void a trick, so the flag disables this check entirely.
    if !kraken_played {
        let total: u16 = picked.iter().map(|e| u16::from(e.tricks)).sum();
        if total != u16::from(round.card_count) {
            return Err(DomainError::TrickCountMismatch {
                expected: round.card_count,
                actual: total,
            });
        }
    }

    Ok(picked
        .into_iter()
        .map(|entry| PlayerStat {
            player_id: entry.player_id,
            bid: entry.bid,
            tricks_won: entry.tricks,
            bonus_points: entry.bonus,
            round_score: score_round(entry.bid, entry.tricks, round.card_count, entry.bonus),
            total_score_snapshot: 0,
        })
        .collect())
}
