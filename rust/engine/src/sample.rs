//! Seeded sample hands, for demos and smoke tests of the settlement path.

use std::collections::BTreeMap;

use crate::cards::Card;
use crate::deck::Deck;
use crate::player::{ActionKind, PlayerSnapshot, Role, SEATS};
use crate::record::{Action, Board, Hand, Street};

/// Deals a complete six-max hand where everyone limps, the big blind checks,
/// and every later street is checked through.
///
/// The button seat, hole cards and board all come from `seed`.
///
/// The record is always built, but the limped line is only legal when
/// `bb_size > 0` and `starting_stack > bb_size`. Outside that range the
/// blinds or limps empty stacks (or there is nothing to call), and
/// [`settle`](crate::engine::settle) rejects the record with an error rather
/// than panicking. Callers taking these values from users should check them
/// first.
///
/// ```
/// use potsettle_engine::engine::settle;
/// use potsettle_engine::sample::checked_down_hand;
///
/// let hand = checked_down_hand(7, 40, 1000);
/// assert_eq!(hand, checked_down_hand(7, 40, 1000));
/// let result = settle(&hand).unwrap();
/// assert_eq!(result.pot, 240);
/// assert_eq!(result.net_total(), 0);
/// ```
pub fn checked_down_hand(seed: u64, bb_size: u32, starting_stack: u32) -> Hand {
    let mut deck = Deck::new_with_seed(seed);
    let button = deck.pick(SEATS);
    deck.shuffle();

    // clockwise from the button
    let seat_at = |k: usize| (button + k) % SEATS;
    let seats: Vec<PlayerSnapshot> = (0..SEATS)
        .map(|seat| PlayerSnapshot {
            seat,
            name: format!("Player{}", seat),
            starting_stack,
            role: Role::CLOCKWISE[(seat + SEATS - button) % SEATS],
        })
        .collect();

    let mut holes: [Vec<Card>; SEATS] = Default::default();
    for _ in 0..2 {
        for k in 1..=SEATS {
            holes[seat_at(k)].extend(deck.deal_card());
        }
    }
    let hole_cards: BTreeMap<usize, String> = holes
        .iter()
        .enumerate()
        .map(|(seat, cards)| (seat, join(cards)))
        .collect();

    deck.burn_card();
    let flop = deck.deal_n::<3>().map(|f| join(&f));
    deck.burn_card();
    let turn = deck.deal_card().map(|c| c.to_string());
    deck.burn_card();
    let river = deck.deal_card().map(|c| c.to_string());

    let mut actions = Vec::new();
    // UTG, MP, CO, BTN limp; SB completes; BB checks its option
    for k in [3, 4, 5, 0] {
        actions.push(Action::new(seat_at(k), Street::Preflop, ActionKind::Call, bb_size));
    }
    actions.push(Action::new(
        seat_at(1),
        Street::Preflop,
        ActionKind::Call,
        bb_size - bb_size / 2,
    ));
    actions.push(Action::new(seat_at(2), Street::Preflop, ActionKind::Check, 0));
    for street in [Street::Flop, Street::Turn, Street::River] {
        for k in [1, 2, 3, 4, 5, 0] {
            actions.push(Action::new(seat_at(k), street, ActionKind::Check, 0));
        }
    }

    Hand {
        id: format!("sample-{}", seed),
        created_at: None,
        bb_size,
        seats,
        hole_cards,
        board: Board { flop, turn, river },
        actions,
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
