use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{parse_cards, Card};
use crate::errors::SettlementError;
use crate::player::{ActionKind, PlayerSnapshot};

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand; ordering follows play.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records a single betting decision.
/// Associates the action with the seat and the street when it occurred.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Acting seat, 0 through 5
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    /// What the seat did
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Chips named by the action (see [`ActionKind`] for the meaning per kind)
    #[serde(default)]
    pub amount: u32,
}

impl Action {
    pub fn new(seat: usize, street: Street, kind: ActionKind, amount: u32) -> Self {
        Self {
            seat,
            street,
            kind,
            amount,
        }
    }
}

/// Community cards as submitted, one text field per street.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub river: Option<String>,
}

/// Parsed and shape-checked community cards.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BoardCards {
    pub flop: Option<[Card; 3]>,
    pub turn: Option<Card>,
    pub river: Option<Card>,
}

impl BoardCards {
    /// Parses the board. Blank fields count as absent.
    pub fn parse(board: &Board) -> Result<Self, SettlementError> {
        let flop = non_blank(&board.flop);
        let turn = non_blank(&board.turn);
        let river = non_blank(&board.river);

        if turn.is_some() && flop.is_none() {
            return Err(SettlementError::InconsistentBoard {
                reason: "turn present without flop".into(),
            });
        }
        if river.is_some() && turn.is_none() {
            return Err(SettlementError::InconsistentBoard {
                reason: "river present without turn".into(),
            });
        }

        let flop = match flop {
            Some(text) => match parse_cards(text)?.as_slice() {
                [a, b, c] => Some([*a, *b, *c]),
                other => {
                    return Err(SettlementError::InconsistentBoard {
                        reason: format!("flop must have 3 cards, found {}", other.len()),
                    })
                }
            },
            None => None,
        };
        Ok(Self {
            flop,
            turn: turn.map(|t| single_card(t, "turn")).transpose()?,
            river: river.map(|r| single_card(r, "river")).transpose()?,
        })
    }

    /// Cards in board order: flop left to right, turn, river.
    pub fn cards(&self) -> Vec<Card> {
        let mut v = Vec::with_capacity(5);
        if let Some(flop) = self.flop {
            v.extend(flop);
        }
        v.extend(self.turn);
        v.extend(self.river);
        v
    }

    /// Whether the cards needed to bet on `street` are on the board.
    pub fn is_dealt(&self, street: Street) -> bool {
        match street {
            Street::Preflop => true,
            Street::Flop => self.flop.is_some(),
            Street::Turn => self.turn.is_some(),
            Street::River => self.river.is_some(),
        }
    }

    /// All five cards, if the board ran out.
    pub fn complete(&self) -> Option<[Card; 5]> {
        match (self.flop, self.turn, self.river) {
            (Some([a, b, c]), Some(t), Some(r)) => Some([a, b, c, t, r]),
            _ => None,
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn single_card(text: &str, street: &str) -> Result<Card, SettlementError> {
    match parse_cards(text)?.as_slice() {
        [card] => Ok(*card),
        other => Err(SettlementError::InconsistentBoard {
            reason: format!("{} must have 1 card, found {}", street, other.len()),
        }),
    }
}

/// Complete record of a six-max hand: the sole input to settlement.
/// Serialized as the JSON shape hand submissions use.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// Record identifier; stamped by the caller when absent
    #[serde(default)]
    pub id: String,
    /// When the hand was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Big blind; the small blind is half of it, rounded down
    pub bb_size: u32,
    /// The six seats, in any order
    pub seats: Vec<PlayerSnapshot>,
    /// Seat index to hole cards, e.g. `"As Ks"`
    #[serde(default)]
    pub hole_cards: BTreeMap<usize, String>,
    /// Community cards
    #[serde(default)]
    pub board: Board,
    /// Betting decisions in the order they happened
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Hand {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
