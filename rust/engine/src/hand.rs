use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Comparable strength of a five-card hand.
///
/// Ordering is by category, then by `ranks` lexicographically, so the derived
/// `Ord` is the poker ordering and equal values are exact ties.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // tie-break ranks, high -> low, zero padded
    pub ranks: [u8; 5],
}

/// Scores exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut counts = [0u8; 15]; // 2..14 used
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    // (count, rank) groups, biggest group first, then highest rank
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut ranks = [0u8; 5];
    for (slot, (_, r)) in ranks.iter_mut().zip(groups.iter()) {
        *slot = *r;
    }

    let straight_high = if groups.len() == 5 {
        straight_high(&ranks)
    } else {
        None
    };

    let category = match (straight_high, flush, groups[0].0, groups.get(1).map(|g| g.0)) {
        (Some(_), true, _, _) => Category::StraightFlush,
        (_, _, 4, _) => Category::FourOfAKind,
        (_, _, 3, Some(2)) => Category::FullHouse,
        (_, true, _, _) => Category::Flush,
        (Some(_), false, _, _) => Category::Straight,
        (_, _, 3, _) => Category::ThreeOfAKind,
        (_, _, 2, Some(2)) => Category::TwoPair,
        (_, _, 2, _) => Category::OnePair,
        _ => Category::HighCard,
    };

    if let Some(high) = straight_high {
        if matches!(category, Category::Straight | Category::StraightFlush) {
            ranks = [high, 0, 0, 0, 0];
        }
    }
    HandStrength { category, ranks }
}

// `desc` holds five distinct ranks, high -> low.
fn straight_high(desc: &[u8; 5]) -> Option<u8> {
    if desc[0] - desc[4] == 4 {
        Some(desc[0])
    } else if *desc == [14, 5, 4, 3, 2] {
        // wheel: the ace plays low
        Some(5)
    } else {
        None
    }
}

/// Best five-card hand among `cards` (5 to 7 cards), trying every
/// five-card combination.
pub fn best_hand(cards: &[Card]) -> Option<HandStrength> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return None;
    }
    (0u32..(1 << n))
        .filter(|mask| mask.count_ones() == 5)
        .map(|mask| {
            let mut five = [cards[0]; 5];
            let picked = (0..n).filter(|i| mask & (1 << i) != 0);
            for (slot, i) in five.iter_mut().zip(picked) {
                *slot = cards[i];
            }
            evaluate_five(&five)
        })
        .max()
}

/// Hole cards plus a complete board.
pub fn evaluate_hand(hole: &[Card; 2], board: &[Card; 5]) -> HandStrength {
    let mut seven = [hole[0]; 7];
    seven[..2].copy_from_slice(hole);
    seven[2..].copy_from_slice(board);
    // seven cards always yield 21 combinations
    best_hand(&seven).unwrap_or(HandStrength {
        category: Category::HighCard,
        ranks: [0; 5],
    })
}

/// Orders contenders strongest first. Ties keep ascending seat order.
pub fn rank_showdown(
    contenders: &[(usize, [Card; 2])],
    board: &[Card; 5],
) -> Vec<(usize, HandStrength)> {
    let mut ranked: Vec<(usize, HandStrength)> = contenders
        .iter()
        .map(|(seat, hole)| (*seat, evaluate_hand(hole, board)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}
