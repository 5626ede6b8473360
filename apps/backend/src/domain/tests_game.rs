use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::game::{Game, GameStatus};
use crate::domain::round::StatEntry;
use crate::domain::snapshot::{snapshot, standings};
use crate::errors::domain::DomainError;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn new_game(list: &[&str]) -> Game {
    Game::new(Uuid::new_v4(), &names(list), OffsetDateTime::now_utc()).expect("valid roster")
}

fn entry(player_id: Uuid, bid: u8, tricks: u8, bonus: u16) -> StatEntry {
    StatEntry {
        player_id,
        bid,
        tricks,
        bonus,
    }
}

/// Resolve round `r` with the first player taking every trick on an exact
/// bid and everyone else zero-bidding clean.
fn resolve_plain(game: &mut Game, r: u8) {
    let entries: Vec<StatEntry> = game
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                entry(p.id, r, r, 0)
            } else {
                entry(p.id, 0, 0, 0)
            }
        })
        .collect();
    game.resolve_round(r, &entries, false).expect("valid round");
}

#[test]
fn creation_requires_at_least_two_players() {
    let err = Game::new(Uuid::new_v4(), &names(&["Solo"]), OffsetDateTime::now_utc()).unwrap_err();
    assert_eq!(err, DomainError::RosterTooSmall { got: 1 });

    let err = Game::new(Uuid::new_v4(), &[], OffsetDateTime::now_utc()).unwrap_err();
    assert_eq!(err, DomainError::RosterTooSmall { got: 0 });
}

#[test]
fn creation_rejects_blank_names_and_trims_the_rest() {
    let err =
        Game::new(Uuid::new_v4(), &names(&["Anne", "   "]), OffsetDateTime::now_utc()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidPlayerName(_)));

    let game = new_game(&["  Anne ", "Rackham"]);
    assert_eq!(game.players[0].name, "Anne");
    assert_eq!(game.players[0].seat_index, 0);
    assert_eq!(game.players[1].seat_index, 1);
}

#[test]
fn new_game_starts_active_with_ten_open_rounds() {
    let game = new_game(&["Anne", "Rackham", "Teach"]);
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.rounds.rounds().len(), 10);
    assert_eq!(game.current_round().round_number, 1);
    assert_eq!(game.created_at, game.last_accessed);
}

#[test]
fn current_round_advances_and_parks_on_the_tenth() {
    let mut game = new_game(&["Anne", "Rackham"]);
    for r in 1..=9u8 {
        resolve_plain(&mut game, r);
        assert_eq!(game.current_round().round_number, r + 1);
    }
    resolve_plain(&mut game, 10);
    // All resolved: the terminal round stays current.
    assert_eq!(game.current_round().round_number, 10);
}

#[test]
fn dealer_rotates_with_the_round_number() {
    let game = new_game(&["Anne", "Rackham", "Teach"]);
    assert_eq!(game.dealer_index_for(1), 0);
    assert_eq!(game.dealer_index_for(2), 1);
    assert_eq!(game.dealer_index_for(3), 2);
    assert_eq!(game.dealer_index_for(4), 0);
    assert_eq!(game.dealer_index_for(10), 0);
}

#[test]
fn completing_round_ten_flips_status_and_undo_reverts_it() {
    let mut game = new_game(&["Anne", "Rackham"]);
    for r in 1..=10u8 {
        resolve_plain(&mut game, r);
    }
    assert_eq!(game.status, GameStatus::Completed);

    game.undo_round(10).unwrap();
    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.current_round().round_number, 10);
}

#[test]
fn totals_and_standings_follow_the_latest_resolved_round() {
    let mut game = new_game(&["Anne", "Rackham"]);
    let (a, b) = (game.players[0].id, game.players[1].id);

    assert_eq!(game.total_for(a), 0);
    assert!(standings(&game).iter().all(|s| s.total_score == 0));

    // Round 1: a +10 (clean zero bid), b +20 (exact bid).
    game.resolve_round(1, &[entry(a, 0, 0, 0), entry(b, 1, 1, 0)], false)
        .unwrap();
    assert_eq!(game.total_for(a), 10);
    assert_eq!(game.total_for(b), 20);

    let rows = standings(&game);
    assert_eq!(rows[0].player_id, b);
    assert_eq!(rows[0].total_score, 20);
    assert_eq!(rows[1].player_id, a);
    assert_eq!(rows[1].total_score, 10);
}

#[test]
fn standings_break_ties_by_seat_order() {
    let mut game = new_game(&["Anne", "Rackham"]);
    let (a, b) = (game.players[0].id, game.players[1].id);

    // Both zero-bid clean under a kraken round: equal totals.
    game.resolve_round(1, &[entry(a, 0, 0, 0), entry(b, 0, 0, 0)], true)
        .unwrap();
    let rows = standings(&game);
    assert_eq!(rows[0].player_id, a);
    assert_eq!(rows[1].player_id, b);
}

#[test]
fn snapshot_carries_rounds_roster_and_derived_fields() {
    let mut game = new_game(&["Anne", "Rackham", "Teach"]);
    let ids: Vec<Uuid> = game.players.iter().map(|p| p.id).collect();

    game.resolve_round(
        1,
        &[
            entry(ids[0], 1, 1, 0),
            entry(ids[1], 0, 0, 0),
            entry(ids[2], 0, 0, 0),
        ],
        false,
    )
    .unwrap();

    let snap = snapshot(&game);
    assert_eq!(snap.id, game.id);
    assert_eq!(snap.players.len(), 3);
    assert_eq!(snap.rounds.len(), 10);
    assert_eq!(snap.current_round, 2);
    assert_eq!(snap.dealer_index, 1);
    assert_eq!(snap.standings.len(), 3);
    assert_eq!(snap.standings[0].player_id, ids[0]);
    assert_eq!(snap.standings[0].total_score, 20);
}

#[test]
fn touch_moves_last_accessed_forward() {
    let mut game = new_game(&["Anne", "Rackham"]);
    let later = game.created_at + time::Duration::minutes(5);
    game.touch(later);
    assert_eq!(game.last_accessed, later);
    assert_ne!(game.created_at, game.last_accessed);
}

#[test]
fn two_player_game_with_retroactive_correction() {
    let mut game = new_game(&["A", "B"]);
    let (a, b) = (game.players[0].id, game.players[1].id);

    game.resolve_round(1, &[entry(a, 0, 0, 0), entry(b, 1, 1, 0)], false)
        .unwrap();
    game.resolve_round(2, &[entry(a, 1, 2, 0), entry(b, 1, 0, 0)], false)
        .unwrap();
    assert_eq!(game.total_for(a), 0);
    assert_eq!(game.total_for(b), 10);

    // Correct round 1: a's zero bid actually failed. The trick total now
    // exceeds the card count, so the edit rides the kraken bypass.
    game.edit_round(1, &[entry(a, 0, 1, 0), entry(b, 1, 1, 0)], true)
        .unwrap();

    let r1 = game.rounds.round(1).unwrap();
    let r2 = game.rounds.round(2).unwrap();
    assert_eq!(r1.stat_for(a).unwrap().total_score_snapshot, -10);
    assert_eq!(r2.stat_for(a).unwrap().total_score_snapshot, -20);
    assert_eq!(r1.stat_for(b).unwrap().total_score_snapshot, 20);
    assert_eq!(r2.stat_for(b).unwrap().total_score_snapshot, 10);
    assert_eq!(game.status, GameStatus::Active);
}
