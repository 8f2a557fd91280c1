use potsettle_engine::hand::{Category, HandStrength};
use potsettle_engine::player::SEATS;
use potsettle_engine::pot::{build_tiers, distribute};

const CLOCKWISE_FROM_SEAT1: [usize; SEATS] = [1, 2, 3, 4, 5, 0];

fn pair_of(rank: u8) -> Option<HandStrength> {
    Some(HandStrength {
        category: Category::OnePair,
        ranks: [rank, 9, 7, 4, 0],
    })
}

#[test]
fn side_pot_with_folded_contributor() {
    // A (seat 0) puts in 100 and folds; B (seat 1) is all-in for 100 with the
    // best hand; C (seat 2) put in 300.
    let committed = [100, 100, 300, 0, 0, 0];
    let folded = [true, false, false, true, true, true];
    let tiers = build_tiers(&committed, &folded);

    assert_eq!(tiers.len(), 2);
    assert_eq!((tiers[0].threshold, tiers[0].amount), (100, 300));
    assert_eq!(tiers[0].eligible, vec![1, 2]);
    assert_eq!((tiers[1].threshold, tiers[1].amount), (300, 200));
    assert_eq!(tiers[1].eligible, vec![2]);

    let mut strengths = [None; SEATS];
    strengths[1] = pair_of(14);
    strengths[2] = pair_of(10);
    let (received, awards) = distribute(&tiers, &strengths, &CLOCKWISE_FROM_SEAT1);

    assert_eq!(received, [0, 300, 200, 0, 0, 0]);
    let net: Vec<i64> = (0..SEATS)
        .map(|s| received[s] as i64 - committed[s] as i64)
        .collect();
    assert_eq!(&net[..3], &[-100, 200, -100]);
    assert_eq!(awards[0].winners, vec![1]);
    assert_eq!(awards[1].winners, vec![2]);
}

#[test]
fn tier_amounts_sum_to_pot() {
    let committed = [40, 250, 600, 600, 20, 1000];
    let folded = [true, false, false, false, true, true];
    let tiers = build_tiers(&committed, &folded);
    let total: u64 = tiers.iter().map(|t| t.amount).sum();
    assert_eq!(total, committed.iter().map(|&c| u64::from(c)).sum::<u64>());
    // seat 5 folded above the top threshold; its overage lands in the top tier
    assert_eq!(tiers.last().unwrap().threshold, 600);
    assert_eq!(tiers.last().unwrap().eligible, vec![2, 3]);
}

#[test]
fn odd_chip_goes_to_first_winner_left_of_button() {
    let committed = [1, 0, 0, 50, 50, 0];
    let folded = [true, true, true, false, false, true];
    let tiers = build_tiers(&committed, &folded);
    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].amount, 101);

    let mut strengths = [None; SEATS];
    strengths[3] = pair_of(8);
    strengths[4] = pair_of(8);

    let (received, _) = distribute(&tiers, &strengths, &CLOCKWISE_FROM_SEAT1);
    assert_eq!(received[3], 51);
    assert_eq!(received[4], 50);

    // button on seat 3: seat 4 is now first to its left
    let (received, awards) = distribute(&tiers, &strengths, &[4, 5, 0, 1, 2, 3]);
    assert_eq!(received[4], 51);
    assert_eq!(received[3], 50);
    assert_eq!(awards[0].winners, vec![4, 3]);
}

#[test]
fn three_way_split_spreads_remainder() {
    let committed = [0, 100, 101, 101, 0, 101];
    let folded = [true, true, false, false, true, false];
    let tiers = build_tiers(&committed, &folded);
    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].amount, 403);

    let mut strengths = [None; SEATS];
    strengths[2] = pair_of(12);
    strengths[3] = pair_of(12);
    strengths[5] = pair_of(12);
    let (received, _) = distribute(&tiers, &strengths, &CLOCKWISE_FROM_SEAT1);
    assert_eq!(received[2], 135);
    assert_eq!(received[3], 134);
    assert_eq!(received[5], 134);
}

#[test]
fn lone_eligible_seat_wins_without_a_strength() {
    let committed = [0, 20, 40, 120, 0, 0];
    let folded = [true, true, true, false, true, true];
    let tiers = build_tiers(&committed, &folded);
    let (received, awards) = distribute(&tiers, &[None; SEATS], &CLOCKWISE_FROM_SEAT1);
    assert_eq!(received[3], 180);
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].winners, vec![3]);
}

#[test]
fn empty_commitments_make_no_tiers() {
    let tiers = build_tiers(&[0; SEATS], &[false; SEATS]);
    assert!(tiers.is_empty());
}
