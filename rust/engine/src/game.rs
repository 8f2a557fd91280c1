use tracing::{debug, trace};

use crate::errors::{SettlementError, Violation};
use crate::player::{PlayerSnapshot, Role, SEATS};
use crate::record::{Action, BoardCards, Street};
use crate::rules::{validate_action, RuleError, ValidatedAction};

/// Replay cursor for one hand's betting.
/// Owned by a single replay and mutated only through `&mut self`.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current betting street
    street: Street,
    /// Chips each seat has left behind
    stacks: [u32; SEATS],
    /// Chips each seat put in on the current street
    street_committed: [u32; SEATS],
    /// Chips each seat put in over the whole hand
    committed: [u32; SEATS],
    /// Sum of everything committed
    pot: u64,
    /// The street total every contesting seat has to match
    facing: u32,
    folded: [bool; SEATS],
    /// Total commitment at the moment a seat ran out of chips
    all_in: [Option<u32>; SEATS],
    /// Seats that still owe a decision on this street
    needs_action: [bool; SEATS],
}

/// What the betting replay hands to showdown and pot allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingOutcome {
    pub committed: [u32; SEATS],
    pub pot: u64,
    pub folded: [bool; SEATS],
    pub all_in: [Option<u32>; SEATS],
    /// Last street reached by the betting
    pub street: Street,
    /// True when every seat but one folded
    pub unopposed: bool,
}

impl BettingOutcome {
    /// Seats still contesting the pot, ascending.
    pub fn contenders(&self) -> Vec<usize> {
        (0..SEATS).filter(|&s| !self.folded[s]).collect()
    }
}

impl GameState {
    /// Seats with an empty stack start out all-in for nothing.
    pub fn new(stacks: [u32; SEATS]) -> Self {
        let mut all_in = [None; SEATS];
        for (seat, stack) in stacks.iter().enumerate() {
            if *stack == 0 {
                all_in[seat] = Some(0);
            }
        }
        let mut gs = Self {
            street: Street::Preflop,
            stacks,
            street_committed: [0; SEATS],
            committed: [0; SEATS],
            pot: 0,
            facing: 0,
            folded: [false; SEATS],
            all_in,
            needs_action: [false; SEATS],
        };
        gs.reopen_action(None);
        gs
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot(&self) -> u64 {
        self.pot
    }
    pub fn facing(&self) -> u32 {
        self.facing
    }
    pub fn stack(&self, seat: usize) -> u32 {
        self.stacks[seat]
    }
    pub fn street_committed(&self, seat: usize) -> u32 {
        self.street_committed[seat]
    }
    pub fn is_folded(&self, seat: usize) -> bool {
        self.folded[seat]
    }
    pub fn is_all_in(&self, seat: usize) -> bool {
        self.all_in[seat].is_some()
    }
    pub fn is_awaiting(&self, seat: usize) -> bool {
        self.needs_action[seat]
    }

    fn can_act(&self, seat: usize) -> bool {
        !self.folded[seat] && self.all_in[seat].is_none()
    }

    /// Only one seat has not folded.
    pub fn is_decided(&self) -> bool {
        self.folded.iter().filter(|f| !**f).count() == 1
    }

    /// Posts a forced bet, capped at the seat's stack. Blinds do not count
    /// as the seat's action for the street.
    pub fn post_blind(&mut self, seat: usize, amount: u32) {
        let chips = amount.min(self.stacks[seat]);
        self.move_chips(seat, chips);
        if self.street_committed[seat] > self.facing {
            self.facing = self.street_committed[seat];
        }
        self.reopen_action(None);
    }

    /// Whether betting on the current street is over.
    pub fn street_closed(&self) -> bool {
        let actors: Vec<usize> = (0..SEATS).filter(|&s| self.can_act(s)).collect();
        let matched = actors
            .iter()
            .all(|&s| self.street_committed[s] >= self.facing);
        matched && (actors.len() <= 1 || actors.iter().all(|&s| !self.needs_action[s]))
    }

    /// Moves to the next street and resets street betting.
    /// Returns `None` once the river is done.
    pub fn advance_street(&mut self) -> Option<Street> {
        let next = self.street.next()?;
        self.street = next;
        self.street_committed = [0; SEATS];
        self.facing = 0;
        self.reopen_action(None);
        Some(next)
    }

    /// Validates and applies the action at `index` of the hand's action list.
    pub fn apply_action(
        &mut self,
        index: usize,
        action: &Action,
        board: &BoardCards,
    ) -> Result<ValidatedAction, SettlementError> {
        let illegal = |violation: Violation| SettlementError::IllegalAction {
            index,
            seat: action.seat,
            street: action.street,
            violation,
        };
        let seat = action.seat;
        if seat >= SEATS {
            return Err(illegal(Violation::UnknownSeat));
        }
        if self.is_decided() {
            return Err(illegal(Violation::HandAlreadyDecided));
        }
        if action.street < self.street {
            return Err(illegal(Violation::StreetRegressed {
                current: self.street,
            }));
        }
        if !board.is_dealt(action.street) {
            return Err(SettlementError::InconsistentBoard {
                reason: format!(
                    "action #{} on {} but the {} cards are missing",
                    index, action.street, action.street
                ),
            });
        }
        while self.street < action.street {
            if !self.street_closed() {
                return Err(illegal(Violation::StreetNotClosed {
                    street: self.street,
                }));
            }
            self.advance_street();
        }
        if self.folded[seat] {
            return Err(illegal(Violation::AlreadyFolded));
        }
        if self.all_in[seat].is_some() {
            return Err(illegal(Violation::AlreadyAllIn));
        }
        if !self.needs_action[seat] {
            return Err(illegal(Violation::NotAwaitingAction));
        }

        let validated = validate_action(
            self.stacks[seat],
            self.street_committed[seat],
            self.facing,
            action.kind,
            action.amount,
        )
        .map_err(|e| match e {
            RuleError::Illegal(v) => illegal(v),
            RuleError::InsufficientStack { required, stack } => {
                SettlementError::InsufficientStack {
                    index,
                    seat,
                    street: action.street,
                    required,
                    stack,
                }
            }
        })?;

        self.apply(seat, &validated);
        trace!(
            index,
            seat,
            street = %action.street,
            kind = ?action.kind,
            chips = validated.chips(),
            pot = self.pot,
            facing = self.facing,
            "applied action"
        );
        Ok(validated)
    }

    fn apply(&mut self, seat: usize, action: &ValidatedAction) {
        self.needs_action[seat] = false;
        match action {
            ValidatedAction::Fold => self.folded[seat] = true,
            ValidatedAction::Check => {}
            ValidatedAction::Call(chips)
            | ValidatedAction::Bet(chips)
            | ValidatedAction::Raise(chips)
            | ValidatedAction::AllIn(chips) => {
                self.move_chips(seat, *chips);
                if self.street_committed[seat] > self.facing {
                    self.facing = self.street_committed[seat];
                    self.reopen_action(Some(seat));
                }
            }
        }
    }

    fn move_chips(&mut self, seat: usize, chips: u32) {
        self.stacks[seat] -= chips;
        self.street_committed[seat] += chips;
        self.committed[seat] += chips;
        self.pot += u64::from(chips);
        if self.stacks[seat] == 0 && self.all_in[seat].is_none() {
            self.all_in[seat] = Some(self.committed[seat]);
            self.needs_action[seat] = false;
        }
    }

    // Every seat that can still act owes a decision, except `aggressor`.
    fn reopen_action(&mut self, aggressor: Option<usize>) {
        for seat in 0..SEATS {
            self.needs_action[seat] = self.can_act(seat) && Some(seat) != aggressor;
        }
    }

    pub fn into_outcome(self) -> BettingOutcome {
        let unopposed = self.is_decided();
        BettingOutcome {
            committed: self.committed,
            pot: self.pot,
            folded: self.folded,
            all_in: self.all_in,
            street: self.street,
            unopposed,
        }
    }
}

/// Replays a hand's betting from the seats' starting stacks.
///
/// `table` is indexed by seat. Blinds are posted from the SB and BB roles
/// before the first recorded action.
pub fn replay(
    table: &[PlayerSnapshot; SEATS],
    bb_size: u32,
    actions: &[Action],
    board: &BoardCards,
) -> Result<BettingOutcome, SettlementError> {
    let stacks: [u32; SEATS] = std::array::from_fn(|seat| table[seat].starting_stack);
    let mut state = GameState::new(stacks);

    for player in table {
        match player.role {
            Role::SmallBlind => state.post_blind(player.seat, bb_size / 2),
            Role::BigBlind => state.post_blind(player.seat, bb_size),
            _ => {}
        }
    }
    debug!(pot = state.pot(), facing = state.facing(), "blinds posted");

    for (index, action) in actions.iter().enumerate() {
        state.apply_action(index, action, board)?;
    }

    if !state.is_decided() {
        loop {
            if !state.street_closed() {
                return Err(SettlementError::IncompleteHand {
                    street: state.street(),
                });
            }
            if state.advance_street().is_none() {
                break;
            }
        }
    }

    let outcome = state.into_outcome();
    debug!(
        pot = outcome.pot,
        street = %outcome.street,
        unopposed = outcome.unopposed,
        "betting replayed"
    );
    Ok(outcome)
}
