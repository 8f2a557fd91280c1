use potsettle_engine::player::ActionKind;
use potsettle_engine::record::{Action, Board, BoardCards, Street};
use potsettle_engine::short_line::short_line;

fn board(flop: Option<&str>, turn: Option<&str>, river: Option<&str>) -> BoardCards {
    BoardCards::parse(&Board {
        flop: flop.map(String::from),
        turn: turn.map(String::from),
        river: river.map(String::from),
    })
    .unwrap()
}

#[test]
fn only_bets_and_raises_carry_amounts() {
    let actions = [
        Action::new(3, Street::Preflop, ActionKind::Raise, 120),
        Action::new(4, Street::Preflop, ActionKind::Fold, 0),
        Action::new(2, Street::Preflop, ActionKind::Call, 80),
        Action::new(2, Street::Flop, ActionKind::Check, 0),
        Action::new(3, Street::Flop, ActionKind::Bet, 90),
        Action::new(2, Street::Flop, ActionKind::AllIn, 880),
    ];
    let line = short_line(&actions, &BoardCards::default());
    assert_eq!(
        line,
        "Seat3:raise120 Seat4:fold Seat2:call Seat2:check Seat3:bet90 Seat2:allin"
    );
}

#[test]
fn board_streets_follow_actions() {
    let actions = [Action::new(1, Street::Preflop, ActionKind::Call, 20)];
    let line = short_line(&actions, &board(Some("Ac Kh Qc"), Some("Js"), Some("10d")));
    assert_eq!(line, "Seat1:call Flop:Ac Kh Qc Turn:Js River:Td");
}

#[test]
fn absent_streets_are_omitted() {
    let line = short_line(&[], &board(Some("2c 3d 4h"), None, None));
    assert_eq!(line, "Flop:2c 3d 4h");
    assert_eq!(short_line(&[], &BoardCards::default()), "");
}

#[test]
fn cards_render_in_canonical_case() {
    let line = short_line(&[], &board(Some("as kd qh"), Some("tc"), None));
    assert_eq!(line, "Flop:As Kd Qh Turn:Tc");
}
