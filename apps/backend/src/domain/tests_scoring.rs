use crate::domain::scoring::score_round;

#[test]
fn zero_bid_success_pays_ten_per_round() {
    for round_no in 1..=10u8 {
        assert_eq!(score_round(0, 0, round_no, 0), 10 * i32::from(round_no));
    }
}

#[test]
fn zero_bid_failure_costs_ten_per_round() {
    for round_no in 1..=10u8 {
        for tricks in 1..=round_no {
            assert_eq!(
                score_round(0, tricks, round_no, 0),
                -10 * i32::from(round_no)
            );
        }
    }
}

#[test]
fn zero_bid_ignores_bonus_in_both_branches() {
    // A bonus only ever attaches to a correct non-zero bid.
    assert_eq!(score_round(0, 0, 7, 30), 70);
    assert_eq!(score_round(0, 2, 7, 30), -70);
}

#[test]
fn exact_bid_pays_twenty_per_trick_plus_bonus() {
    assert_eq!(score_round(1, 1, 1, 0), 20);
    assert_eq!(score_round(3, 3, 5, 0), 60);
    assert_eq!(score_round(3, 3, 5, 40), 100);
    assert_eq!(score_round(10, 10, 10, 20), 220);
}

#[test]
fn missed_bid_costs_ten_per_trick_of_difference() {
    assert_eq!(score_round(1, 2, 2, 0), -10);
    assert_eq!(score_round(4, 1, 5, 0), -30);
    assert_eq!(score_round(1, 4, 5, 0), -30);
}

#[test]
fn missed_bid_discards_bonus_silently() {
    // A caller-supplied bonus on a missed bid is a no-op, not an error.
    assert_eq!(score_round(2, 3, 4, 50), -10);
    assert_eq!(score_round(2, 3, 4, 0), -10);
}

#[test]
fn score_does_not_depend_on_round_for_non_zero_bids() {
    for round_no in 3..=10u8 {
        assert_eq!(score_round(3, 3, round_no, 10), 70);
        assert_eq!(score_round(3, 1, round_no, 10), -20);
    }
}
