use crate::errors::Violation;
use crate::player::ActionKind as K;

/// An action that passed the betting rules, carrying the chips it moves
/// from the seat's stack into the pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips moved from stack to pot.
    pub fn chips(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(c)
            | ValidatedAction::Bet(c)
            | ValidatedAction::Raise(c)
            | ValidatedAction::AllIn(c) => *c,
        }
    }
}

/// Rejection from [`validate_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    Illegal(Violation),
    InsufficientStack { required: u32, stack: u32 },
}

impl From<Violation> for RuleError {
    fn from(v: Violation) -> Self {
        RuleError::Illegal(v)
    }
}

/// Validates one recorded action against the acting seat's chips and the
/// street's facing bet.
///
/// # Arguments
///
/// * `stack` - Seat's remaining chips
/// * `committed` - Chips the seat already put in on this street
/// * `facing` - The street's current bet to match
/// * `kind` / `amount` - The recorded decision. Bets and raises name the new
///   street total; calls name the chips added (or 0); all-ins may name 0, the
///   chips added, or the resulting street total.
///
/// No minimum raise increment is enforced: any bet or raise strictly above
/// the facing bet is legal.
///
/// # Examples
///
/// ```
/// use potsettle_engine::errors::Violation;
/// use potsettle_engine::player::ActionKind;
/// use potsettle_engine::rules::{validate_action, RuleError, ValidatedAction};
///
/// // Big blind facing a raise to 120 with 40 already posted
/// let call = validate_action(960, 40, 120, ActionKind::Call, 80);
/// assert_eq!(call, Ok(ValidatedAction::Call(80)));
///
/// // Checking while a bet is outstanding
/// let check = validate_action(960, 40, 120, ActionKind::Check, 0);
/// assert!(matches!(
///     check,
///     Err(RuleError::Illegal(Violation::CheckFacingBet { .. }))
/// ));
/// ```
pub fn validate_action(
    stack: u32,
    committed: u32,
    facing: u32,
    kind: K,
    amount: u32,
) -> Result<ValidatedAction, RuleError> {
    match kind {
        K::Fold => {
            if amount != 0 {
                return Err(Violation::UnexpectedAmount {
                    kind: "fold",
                    amount,
                }
                .into());
            }
            Ok(ValidatedAction::Fold)
        }
        K::Check => {
            if amount != 0 {
                return Err(Violation::UnexpectedAmount {
                    kind: "check",
                    amount,
                }
                .into());
            }
            if committed < facing {
                return Err(Violation::CheckFacingBet { facing, committed }.into());
            }
            Ok(ValidatedAction::Check)
        }
        K::Call => {
            let owed = facing.saturating_sub(committed);
            if owed == 0 {
                return Err(Violation::NothingToCall.into());
            }
            if stack == 0 {
                return Err(Violation::EmptyStack.into());
            }
            let chips = owed.min(stack);
            if amount != 0 && amount != chips {
                if amount > stack {
                    return Err(RuleError::InsufficientStack {
                        required: amount,
                        stack,
                    });
                }
                return Err(Violation::AmountMismatch {
                    declared: amount,
                    expected: chips,
                }
                .into());
            }
            Ok(ValidatedAction::Call(chips))
        }
        K::Bet => {
            if facing > 0 {
                return Err(Violation::BetIntoWager { facing }.into());
            }
            let chips = raise_chips(stack, committed, facing, amount)?;
            Ok(ValidatedAction::Bet(chips))
        }
        K::Raise => {
            if facing == 0 {
                return Err(Violation::NothingToRaise.into());
            }
            let chips = raise_chips(stack, committed, facing, amount)?;
            Ok(ValidatedAction::Raise(chips))
        }
        K::AllIn => {
            if stack == 0 {
                return Err(Violation::EmptyStack.into());
            }
            let total = committed.saturating_add(stack);
            if amount != 0 && amount != stack && amount != total {
                return Err(Violation::AmountMismatch {
                    declared: amount,
                    expected: total,
                }
                .into());
            }
            Ok(ValidatedAction::AllIn(stack))
        }
    }
}

// Chips needed to make the street total `amount`.
fn raise_chips(stack: u32, committed: u32, facing: u32, amount: u32) -> Result<u32, RuleError> {
    if amount <= facing {
        return Err(Violation::NotAboveFacing { amount, facing }.into());
    }
    let chips = amount - committed;
    if chips > stack {
        return Err(RuleError::InsufficientStack {
            required: chips,
            stack,
        });
    }
    Ok(chips)
}
