use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of seats at a six-max table.
pub const SEATS: usize = 6;

/// A seat's position relative to the button.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "CO")]
    Cutoff,
}

impl Role {
    /// Roles clockwise from the button.
    pub const CLOCKWISE: [Role; SEATS] = [
        Role::Button,
        Role::SmallBlind,
        Role::BigBlind,
        Role::UnderTheGun,
        Role::Middle,
        Role::Cutoff,
    ];

    /// Distance clockwise from the seat immediately left of the button.
    /// The small blind is 0 and the button is 5; odd chips go out in this order.
    pub fn odd_chip_priority(self) -> usize {
        match self {
            Role::SmallBlind => 0,
            Role::BigBlind => 1,
            Role::UnderTheGun => 2,
            Role::Middle => 3,
            Role::Cutoff => 4,
            Role::Button => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Button => "BTN",
            Role::SmallBlind => "SB",
            Role::BigBlind => "BB",
            Role::UnderTheGun => "UTG",
            Role::Middle => "MP",
            Role::Cutoff => "CO",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seat's identity and chips at the start of a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Seat index, 0 through 5
    pub seat: usize,
    /// Display name
    pub name: String,
    /// Chips in front of the player before blinds are posted
    pub starting_stack: u32,
    /// Table position for this hand
    pub role: Role,
}

/// The kind of a recorded betting decision.
/// Wire names are the short codes used by hand submissions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fold and forfeit the hand
    #[serde(rename = "f", alias = "fold")]
    Fold,
    /// Check (only valid when nothing is owed)
    #[serde(rename = "x", alias = "check")]
    Check,
    /// Match the facing bet
    #[serde(rename = "c", alias = "call")]
    Call,
    /// Open the betting on a street; the amount is the bet size
    #[serde(rename = "b", alias = "bet")]
    Bet,
    /// Raise the facing bet; the amount is the new total for the street
    #[serde(rename = "r", alias = "raise")]
    Raise,
    /// Commit every remaining chip
    #[serde(rename = "allin", alias = "all_in")]
    AllIn,
}

impl ActionKind {
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "allin",
        }
    }
}
