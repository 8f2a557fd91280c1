//! Canonical one-line summary of a hand, used for display and as a search key.

use crate::cards::Card;
use crate::player::ActionKind;
use crate::record::{Action, BoardCards};

/// Renders `Seat<N>:<verb>[<amount>]` per action, then the board streets
/// that are present.
///
/// ```
/// use potsettle_engine::cards::parse_cards;
/// use potsettle_engine::player::ActionKind;
/// use potsettle_engine::record::{Action, BoardCards, Street};
/// use potsettle_engine::short_line::short_line;
///
/// let actions = [
///     Action::new(3, Street::Preflop, ActionKind::Raise, 120),
///     Action::new(2, Street::Preflop, ActionKind::Call, 80),
/// ];
/// let flop = parse_cards("Ac Kh Qc").unwrap();
/// let board = BoardCards {
///     flop: Some([flop[0], flop[1], flop[2]]),
///     ..Default::default()
/// };
/// assert_eq!(
///     short_line(&actions, &board),
///     "Seat3:raise120 Seat2:call Flop:Ac Kh Qc"
/// );
/// ```
pub fn short_line(actions: &[Action], board: &BoardCards) -> String {
    let mut parts: Vec<String> = actions.iter().map(render_action).collect();
    if let Some(flop) = board.flop {
        parts.push(format!("Flop:{}", join_cards(&flop)));
    }
    if let Some(turn) = board.turn {
        parts.push(format!("Turn:{}", turn));
    }
    if let Some(river) = board.river {
        parts.push(format!("River:{}", river));
    }
    parts.join(" ").trim_end().to_string()
}

fn render_action(action: &Action) -> String {
    match action.kind {
        ActionKind::Bet | ActionKind::Raise => {
            format!("Seat{}:{}{}", action.seat, action.kind.verb(), action.amount)
        }
        kind => format!("Seat{}:{}", action.seat, kind.verb()),
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
