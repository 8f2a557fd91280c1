use serde::{Deserialize, Serialize};

use crate::hand::HandStrength;
use crate::player::SEATS;

/// One layer of the pot: the chips only seats committed at least
/// `threshold` may win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotTier {
    /// Committed total that caps this tier
    pub threshold: u32,
    pub amount: u64,
    /// Non-folded seats committed at least `threshold`, ascending
    pub eligible: Vec<usize>,
}

/// How one tier was paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    pub amount: u64,
    pub eligible: Vec<usize>,
    /// Winning seats in odd-chip order
    pub winners: Vec<usize>,
}

/// Splits the chips committed over a hand into tiers.
///
/// Thresholds are the distinct totals of the non-folded seats. Folded seats
/// feed every tier up to their commitment and are never eligible; anything
/// a folded seat put in above the top threshold joins the top tier.
pub fn build_tiers(committed: &[u32; SEATS], folded: &[bool; SEATS]) -> Vec<PotTier> {
    let mut thresholds: Vec<u32> = (0..SEATS)
        .filter(|&s| !folded[s])
        .map(|s| committed[s])
        .collect();
    thresholds.sort_unstable();
    thresholds.dedup();

    let mut tiers = Vec::with_capacity(thresholds.len());
    let mut previous = 0u32;
    for (i, &threshold) in thresholds.iter().enumerate() {
        let top = i + 1 == thresholds.len();
        let amount: u64 = committed
            .iter()
            .map(|&c| {
                let upper = if top { c } else { c.min(threshold) };
                u64::from(upper.saturating_sub(previous.min(c)))
            })
            .sum();
        let eligible: Vec<usize> = (0..SEATS)
            .filter(|&s| !folded[s] && committed[s] >= threshold)
            .collect();
        if amount > 0 {
            tiers.push(PotTier {
                threshold,
                amount,
                eligible,
            });
        }
        previous = threshold;
    }
    tiers
}

/// Pays out every tier and returns the chips each seat receives.
///
/// `strengths` holds a showdown value for each seat that reached showdown.
/// A tier with a single eligible seat goes to it without comparison.
/// `odd_chip_order` lists seats starting left of the button; leftover chips of
/// an uneven split go one at a time to winners in that order.
pub fn distribute(
    tiers: &[PotTier],
    strengths: &[Option<HandStrength>; SEATS],
    odd_chip_order: &[usize; SEATS],
) -> ([u64; SEATS], Vec<PotAward>) {
    let mut received = [0u64; SEATS];
    let mut awards = Vec::with_capacity(tiers.len());

    for tier in tiers {
        let winners = tier_winners(tier, strengths, odd_chip_order);
        if winners.is_empty() {
            continue;
        }
        let share = tier.amount / winners.len() as u64;
        let remainder = (tier.amount % winners.len() as u64) as usize;
        for (i, &seat) in winners.iter().enumerate() {
            received[seat] += share + u64::from(i < remainder);
        }
        awards.push(PotAward {
            amount: tier.amount,
            eligible: tier.eligible.clone(),
            winners,
        });
    }
    (received, awards)
}

fn tier_winners(
    tier: &PotTier,
    strengths: &[Option<HandStrength>; SEATS],
    odd_chip_order: &[usize; SEATS],
) -> Vec<usize> {
    let in_order = odd_chip_order
        .iter()
        .copied()
        .filter(|s| tier.eligible.contains(s));
    if tier.eligible.len() == 1 {
        return in_order.collect();
    }
    let best = tier.eligible.iter().filter_map(|&s| strengths[s]).max();
    in_order.filter(|&s| strengths[s] == best).collect()
}
