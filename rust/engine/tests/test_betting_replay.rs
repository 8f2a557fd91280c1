use potsettle_engine::errors::{SettlementError, Violation};
use potsettle_engine::game::{replay, BettingOutcome, GameState};
use potsettle_engine::player::{ActionKind, PlayerSnapshot, Role, SEATS};
use potsettle_engine::record::{Action, Board, BoardCards, Street};

use ActionKind::{AllIn, Bet, Call, Check, Fold, Raise};
use Street::{Flop, Preflop, River, Turn};

// seat 0 BTN, 1 SB, 2 BB, 3 UTG, 4 MP, 5 CO
fn table(stacks: [u32; SEATS]) -> [PlayerSnapshot; SEATS] {
    std::array::from_fn(|seat| PlayerSnapshot {
        seat,
        name: format!("P{seat}"),
        starting_stack: stacks[seat],
        role: Role::CLOCKWISE[seat],
    })
}

fn full_board() -> BoardCards {
    BoardCards::parse(&Board {
        flop: Some("2c 7d 9h".into()),
        turn: Some("Js".into()),
        river: Some("Kc".into()),
    })
    .unwrap()
}

fn act(seat: usize, street: Street, kind: ActionKind, amount: u32) -> Action {
    Action::new(seat, street, kind, amount)
}

fn limped_preflop() -> Vec<Action> {
    vec![
        act(3, Preflop, Call, 40),
        act(4, Preflop, Call, 0),
        act(5, Preflop, Call, 40),
        act(0, Preflop, Call, 40),
        act(1, Preflop, Call, 20),
        act(2, Preflop, Check, 0),
    ]
}

fn run(stacks: [u32; SEATS], actions: &[Action], board: &BoardCards) -> Result<BettingOutcome, SettlementError> {
    replay(&table(stacks), 40, actions, board)
}

fn violation_of(err: SettlementError) -> (usize, Violation) {
    match err {
        SettlementError::IllegalAction {
            index, violation, ..
        } => (index, violation),
        other => panic!("expected IllegalAction, got {other:?}"),
    }
}

#[test]
fn blinds_are_posted_from_roles() {
    let actions = [
        act(3, Preflop, Raise, 120),
        act(4, Preflop, Fold, 0),
        act(5, Preflop, Fold, 0),
        act(0, Preflop, Fold, 0),
        act(1, Preflop, Fold, 0),
        act(2, Preflop, Fold, 0),
    ];
    let out = run([1000; SEATS], &actions, &BoardCards::default()).unwrap();
    assert!(out.unopposed);
    assert_eq!(out.committed, [0, 20, 40, 120, 0, 0]);
    assert_eq!(out.pot, 180);
    assert_eq!(out.street, Preflop);
    assert_eq!(out.contenders(), vec![3]);
}

#[test]
fn big_blind_keeps_its_option() {
    let mut actions = limped_preflop();
    actions.pop();
    let err = run([1000; SEATS], &actions, &full_board()).unwrap_err();
    assert_eq!(err, SettlementError::IncompleteHand { street: Preflop });
}

#[test]
fn unfinished_flop_is_incomplete() {
    let err = run([1000; SEATS], &limped_preflop(), &full_board()).unwrap_err();
    assert_eq!(err, SettlementError::IncompleteHand { street: Flop });
}

#[test]
fn raise_reopens_action_until_called() {
    let mut actions = limped_preflop();
    actions.extend([
        act(1, Flop, Bet, 80),
        act(2, Flop, Raise, 240),
        act(3, Flop, Fold, 0),
        act(4, Flop, Fold, 0),
        act(5, Flop, Fold, 0),
        act(0, Flop, Fold, 0),
        act(1, Flop, Call, 160),
        act(1, Turn, Check, 0),
        act(2, Turn, Check, 0),
        act(1, River, Check, 0),
        act(2, River, Check, 0),
    ]);
    let out = run([1000; SEATS], &actions, &full_board()).unwrap();
    assert!(!out.unopposed);
    assert_eq!(out.street, River);
    assert_eq!(out.committed, [40, 280, 280, 40, 40, 40]);
    assert_eq!(out.pot, 720);
    assert_eq!(out.contenders(), vec![1, 2]);
}

#[test]
fn check_facing_a_bet_is_illegal() {
    let actions = [act(3, Preflop, Check, 0)];
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(
        err,
        SettlementError::IllegalAction {
            index: 0,
            seat: 3,
            street: Preflop,
            violation: Violation::CheckFacingBet {
                facing: 40,
                committed: 0
            },
        }
    );
}

#[test]
fn next_street_before_closing_is_illegal() {
    let actions = [act(3, Preflop, Raise, 120), act(1, Flop, Check, 0)];
    let err = run([1000; SEATS], &actions, &full_board()).unwrap_err();
    assert_eq!(
        violation_of(err),
        (1, Violation::StreetNotClosed { street: Preflop })
    );
}

#[test]
fn going_back_a_street_is_illegal() {
    let mut actions = limped_preflop();
    actions.push(act(1, Flop, Check, 0));
    actions.push(act(2, Preflop, Check, 0));
    let err = run([1000; SEATS], &actions, &full_board()).unwrap_err();
    assert_eq!(
        violation_of(err),
        (7, Violation::StreetRegressed { current: Flop })
    );
}

#[test]
fn raise_beyond_stack_is_insufficient() {
    let mut stacks = [1000; SEATS];
    stacks[3] = 100;
    let actions = [act(3, Preflop, Raise, 200)];
    let err = run(stacks, &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(
        err,
        SettlementError::InsufficientStack {
            index: 0,
            seat: 3,
            street: Preflop,
            required: 200,
            stack: 100,
        }
    );
}

#[test]
fn folded_seat_cannot_act() {
    let actions = [act(3, Preflop, Fold, 0), act(3, Preflop, Call, 0)];
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(violation_of(err), (1, Violation::AlreadyFolded));
}

#[test]
fn seat_cannot_act_twice_without_new_action() {
    let actions = [act(3, Preflop, Call, 40), act(3, Preflop, Call, 0)];
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(violation_of(err), (1, Violation::NotAwaitingAction));
}

#[test]
fn actions_after_everyone_folds_are_illegal() {
    let actions = [
        act(3, Preflop, Fold, 0),
        act(4, Preflop, Fold, 0),
        act(5, Preflop, Fold, 0),
        act(0, Preflop, Fold, 0),
        act(1, Preflop, Fold, 0),
        act(2, Preflop, Check, 0),
    ];
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(violation_of(err), (5, Violation::HandAlreadyDecided));
}

#[test]
fn call_amount_must_match_chips_owed() {
    let actions = [act(3, Preflop, Raise, 120), act(2, Preflop, Call, 100)];
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(
        violation_of(err),
        (
            1,
            Violation::AmountMismatch {
                declared: 100,
                expected: 80
            }
        )
    );
}

#[test]
fn action_needs_its_street_on_the_board() {
    let mut actions = limped_preflop();
    actions.push(act(1, Flop, Check, 0));
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert!(matches!(err, SettlementError::InconsistentBoard { .. }));
}

#[test]
fn unknown_seat_in_action_is_illegal() {
    let actions = [act(7, Preflop, Fold, 0)];
    let err = run([1000; SEATS], &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(violation_of(err), (0, Violation::UnknownSeat));
}

#[test]
fn empty_stack_seat_is_all_in_from_the_start() {
    let mut stacks = [1000; SEATS];
    stacks[4] = 0;
    let actions = [act(3, Preflop, Call, 40), act(4, Preflop, Fold, 0)];
    let err = run(stacks, &actions, &BoardCards::default()).unwrap_err();
    assert_eq!(violation_of(err), (1, Violation::AlreadyAllIn));
}

#[test]
fn all_in_and_call_runs_out_the_board() {
    let mut stacks = [1000; SEATS];
    stacks[3] = 100;
    let actions = [
        act(3, Preflop, AllIn, 0),
        act(4, Preflop, Fold, 0),
        act(5, Preflop, Fold, 0),
        act(0, Preflop, Fold, 0),
        act(1, Preflop, Fold, 0),
        act(2, Preflop, Call, 60),
    ];
    let out = run(stacks, &actions, &full_board()).unwrap();
    assert!(!out.unopposed);
    assert_eq!(out.street, River);
    assert_eq!(out.all_in[3], Some(100));
    assert_eq!(out.all_in[2], None);
    assert_eq!(out.committed, [0, 20, 100, 100, 0, 0]);
    assert_eq!(out.pot, 220);
}

#[test]
fn short_blind_posts_what_it_has() {
    let mut stacks = [1000; SEATS];
    stacks[2] = 25;
    let actions = [
        act(3, Preflop, Fold, 0),
        act(4, Preflop, Fold, 0),
        act(5, Preflop, Fold, 0),
        act(0, Preflop, Fold, 0),
        act(1, Preflop, Call, 5),
    ];
    let out = run(stacks, &actions, &full_board()).unwrap();
    assert_eq!(out.committed[2], 25);
    assert_eq!(out.committed[1], 25);
    assert_eq!(out.all_in[2], Some(25));
    assert_eq!(out.pot, 50);
}

#[test]
fn state_tracks_each_action_mid_street() {
    let mut state = GameState::new([1000, 1000, 1000, 1000, 1000, 100]);
    state.post_blind(1, 20);
    state.post_blind(2, 40);
    let board = BoardCards::default();

    assert_eq!(state.stack(1), 980);
    assert_eq!(state.street_committed(2), 40);
    assert!(state.is_awaiting(2), "big blind keeps its option");

    state.apply_action(0, &act(3, Preflop, Raise, 120), &board).unwrap();
    assert_eq!(state.stack(3), 880);
    assert_eq!(state.street_committed(3), 120);
    assert_eq!(state.facing(), 120);
    assert!(!state.is_awaiting(3));
    assert!(state.is_awaiting(2));

    state.apply_action(1, &act(4, Preflop, Fold, 0), &board).unwrap();
    assert!(state.is_folded(4));
    assert!(!state.is_awaiting(4));

    // short all-in below the facing bet is a call and reopens nothing
    state.apply_action(2, &act(5, Preflop, AllIn, 0), &board).unwrap();
    assert!(state.is_all_in(5));
    assert_eq!(state.stack(5), 0);
    assert_eq!(state.street_committed(5), 100);
    assert_eq!(state.facing(), 120);
    assert!(!state.is_awaiting(3));

    assert_eq!(state.pot(), 20 + 40 + 120 + 100);
    assert!(!state.street_closed());
    assert_eq!(state.street(), Preflop);
}
