use thiserror::Error;

use crate::cards::Card;
use crate::record::Street;

/// Why a recorded action was rejected during replay.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("seat index is outside 0..6")]
    UnknownSeat,
    #[error("the hand was already decided")]
    HandAlreadyDecided,
    #[error("street {current} is already in progress")]
    StreetRegressed { current: Street },
    #[error("street {street} has not closed")]
    StreetNotClosed { street: Street },
    #[error("seat has already folded")]
    AlreadyFolded,
    #[error("seat is already all-in")]
    AlreadyAllIn,
    #[error("seat is not owed an action")]
    NotAwaitingAction,
    #[error("{kind} must carry amount 0, got {amount}")]
    UnexpectedAmount { kind: &'static str, amount: u32 },
    #[error("cannot check facing a bet of {facing} with {committed} committed")]
    CheckFacingBet { facing: u32, committed: u32 },
    #[error("nothing to call")]
    NothingToCall,
    #[error("declared amount {declared} does not match {expected} chips")]
    AmountMismatch { declared: u32, expected: u32 },
    #[error("cannot bet into an existing wager of {facing}")]
    BetIntoWager { facing: u32 },
    #[error("cannot raise without a wager to raise")]
    NothingToRaise,
    #[error("amount {amount} does not exceed the facing bet of {facing}")]
    NotAboveFacing { amount: u32, facing: u32 },
    #[error("seat has no chips left")]
    EmptyStack,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("Malformed card: {token:?}")]
    MalformedCard { token: String },
    #[error("Duplicate card: {card}")]
    DuplicateCard { card: Card },
    #[error("Invalid roles: expected exactly BTN, SB, BB, UTG, MP, CO")]
    InvalidRoleSet,
    #[error("Invalid seats: expected exactly seats 0 through 5")]
    InvalidSeatSet,
    #[error("Unknown seat {seat}")]
    UnknownSeat { seat: usize },
    #[error("Seat {seat} must hold 2 hole cards, found {found}")]
    InvalidHoleCards { seat: usize, found: usize },
    #[error("Seat {seat} reached showdown without hole cards")]
    MissingHoleCards { seat: usize },
    #[error("Illegal action #{index} by seat {seat} on {street}: {violation}")]
    IllegalAction {
        index: usize,
        seat: usize,
        street: Street,
        violation: Violation,
    },
    #[error(
        "Insufficient stack for action #{index} by seat {seat} on {street}: needs {required}, has {stack}"
    )]
    InsufficientStack {
        index: usize,
        seat: usize,
        street: Street,
        required: u32,
        stack: u32,
    },
    #[error("Inconsistent board: {reason}")]
    InconsistentBoard { reason: String },
    #[error("Incomplete hand: betting on {street} never closed")]
    IncompleteHand { street: Street },
}
