use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::cards::{ensure_unique, parse_cards, Card};
use crate::errors::SettlementError;
use crate::game::replay;
use crate::hand::{rank_showdown, Category};
use crate::player::{PlayerSnapshot, Role, SEATS};
use crate::pot::{build_tiers, distribute, PotAward};
use crate::record::{BoardCards, Hand};
use crate::short_line::short_line;

/// A seat's best hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub seat: usize,
    pub category: Category,
    pub ranks: [u8; 5],
}

/// Outcome of settling one hand.
///
/// `winnings` is net per seat (chips won minus chips committed) and always
/// sums to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Seat index to net chips won or lost
    pub winnings: BTreeMap<usize, i64>,
    /// Canonical summary of actions and board
    pub short_line: String,
    /// Total chips committed, blinds included
    pub pot: u64,
    /// True when everyone else folded and no showdown took place
    pub unopposed: bool,
    /// Per-tier payouts, main pot first
    pub pots: Vec<PotAward>,
    /// Showdown hands, strongest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub showdown: Vec<ShowdownEntry>,
}

impl SettlementResult {
    /// Sum of net winnings; zero for every settled hand.
    pub fn net_total(&self) -> i64 {
        self.winnings.values().sum()
    }
}

/// Settles a complete six-max hand record.
///
/// Validates seats, roles, cards and board, replays the betting, evaluates
/// the showdown when more than one seat is left, and distributes every pot
/// tier. Any validation failure aborts with no partial result.
///
/// # Examples
///
/// ```
/// use potsettle_engine::engine::settle;
/// use potsettle_engine::record::Hand;
///
/// let hand = Hand::from_json(r#"{
///     "bb_size": 40,
///     "seats": [
///         {"seat": 0, "name": "P0", "starting_stack": 1000, "role": "BTN"},
///         {"seat": 1, "name": "P1", "starting_stack": 1000, "role": "SB"},
///         {"seat": 2, "name": "P2", "starting_stack": 1000, "role": "BB"},
///         {"seat": 3, "name": "P3", "starting_stack": 1000, "role": "UTG"},
///         {"seat": 4, "name": "P4", "starting_stack": 1000, "role": "MP"},
///         {"seat": 5, "name": "P5", "starting_stack": 1000, "role": "CO"}
///     ],
///     "actions": [
///         {"seat": 3, "street": "preflop", "type": "r", "amount": 120},
///         {"seat": 4, "street": "preflop", "type": "f"},
///         {"seat": 5, "street": "preflop", "type": "f"},
///         {"seat": 0, "street": "preflop", "type": "f"},
///         {"seat": 1, "street": "preflop", "type": "f"},
///         {"seat": 2, "street": "preflop", "type": "f"}
///     ]
/// }"#).unwrap();
///
/// let result = settle(&hand).unwrap();
/// assert!(result.unopposed);
/// assert_eq!(result.winnings[&3], 60);
/// assert_eq!(result.net_total(), 0);
/// ```
pub fn settle(hand: &Hand) -> Result<SettlementResult, SettlementError> {
    let _span = debug_span!("settle", hand_id = %hand.id).entered();

    let table = seat_table(&hand.seats)?;
    let holes = parse_hole_cards(&hand.hole_cards)?;
    let board = BoardCards::parse(&hand.board)?;
    ensure_unique(
        holes
            .iter()
            .flatten()
            .flat_map(|hole| hole.iter().copied())
            .chain(board.cards()),
    )?;

    let outcome = replay(&table, hand.bb_size, &hand.actions, &board)?;

    let mut strengths = [None; SEATS];
    let mut showdown = Vec::new();
    if !outcome.unopposed {
        let full = board
            .complete()
            .ok_or_else(|| SettlementError::InconsistentBoard {
                reason: "showdown needs all five board cards".into(),
            })?;
        let contenders = outcome
            .contenders()
            .into_iter()
            .map(|seat| {
                holes[seat]
                    .map(|hole| (seat, hole))
                    .ok_or(SettlementError::MissingHoleCards { seat })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (seat, strength) in rank_showdown(&contenders, &full) {
            strengths[seat] = Some(strength);
            showdown.push(ShowdownEntry {
                seat,
                category: strength.category,
                ranks: strength.ranks,
            });
        }
        debug!(contenders = contenders.len(), "showdown evaluated");
    }

    let tiers = build_tiers(&outcome.committed, &outcome.folded);
    let (received, pots) = distribute(&tiers, &strengths, &odd_chip_order(&table));
    let winnings: BTreeMap<usize, i64> = (0..SEATS)
        .map(|seat| {
            let net = received[seat] as i64 - i64::from(outcome.committed[seat]);
            (seat, net)
        })
        .collect();

    let result = SettlementResult {
        winnings,
        short_line: short_line(&hand.actions, &board),
        pot: outcome.pot,
        unopposed: outcome.unopposed,
        pots,
        showdown,
    };
    debug!(
        pot = result.pot,
        tiers = result.pots.len(),
        unopposed = result.unopposed,
        "hand settled"
    );
    Ok(result)
}

/// Seats indexed by seat number, after checking seats and roles.
fn seat_table(seats: &[PlayerSnapshot]) -> Result<[PlayerSnapshot; SEATS], SettlementError> {
    let mut table = seats.to_vec();
    table.sort_by_key(|p| p.seat);
    if table.len() != SEATS || table.iter().enumerate().any(|(i, p)| p.seat != i) {
        return Err(SettlementError::InvalidSeatSet);
    }
    let mut roles: Vec<Role> = table.iter().map(|p| p.role).collect();
    roles.sort_unstable();
    roles.dedup();
    if roles.len() != SEATS {
        return Err(SettlementError::InvalidRoleSet);
    }
    table
        .try_into()
        .map_err(|_| SettlementError::InvalidSeatSet)
}

fn parse_hole_cards(
    hole_cards: &BTreeMap<usize, String>,
) -> Result<[Option<[Card; 2]>; SEATS], SettlementError> {
    let mut holes = [None; SEATS];
    for (&seat, text) in hole_cards {
        if seat >= SEATS {
            return Err(SettlementError::UnknownSeat { seat });
        }
        if text.trim().is_empty() {
            continue;
        }
        holes[seat] = match parse_cards(text)?.as_slice() {
            [a, b] => Some([*a, *b]),
            other => {
                return Err(SettlementError::InvalidHoleCards {
                    seat,
                    found: other.len(),
                })
            }
        };
    }
    Ok(holes)
}

// Seats ordered clockwise starting left of the button.
fn odd_chip_order(table: &[PlayerSnapshot; SEATS]) -> [usize; SEATS] {
    let mut order: [usize; SEATS] = std::array::from_fn(|seat| seat);
    order.sort_by_key(|&seat| table[seat].role.odd_chip_priority());
    order
}
