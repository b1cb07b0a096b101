use crate::domain::state::CheckoutRule;
use crate::domain::test_state_helpers::{match_at, new_match};
use crate::domain::turns::{submit_raw_turn, submit_turn, TurnOutcome};
use crate::domain::TurnInput;
use crate::errors::domain::ValidationKind;

fn input(total: u32, double: bool) -> TurnInput {
    TurnInput::new(total, double).unwrap()
}

#[test]
fn normal_turn_decrements_records_and_advances() {
    let m = new_match(2, 501, CheckoutRule::Double);
    let res = submit_raw_turn(&m, "100").unwrap();

    assert_eq!(
        res.outcome,
        TurnOutcome::Scored {
            player_id: 0,
            scored: 100,
            remaining: 401
        }
    );
    assert_eq!(res.next.players[0].remaining_score, 401);
    assert_eq!(res.next.players[0].throw_history, vec![100]);
    assert_eq!(res.next.current_player_index, 1);
    // other players untouched
    assert_eq!(res.next.players[1], m.players[1]);
}

#[test]
fn zero_is_an_accepted_turn() {
    let m = new_match(2, 501, CheckoutRule::Double);
    let res = submit_raw_turn(&m, "0").unwrap();
    assert_eq!(res.next.players[0].remaining_score, 501);
    assert_eq!(res.next.players[0].throw_history, vec![0]);
    assert_eq!(res.next.current_player_index, 1);
}

#[test]
fn overshoot_is_a_bust() {
    let m = match_at(30, CheckoutRule::Single);
    let res = submit_raw_turn(&m, "31").unwrap();

    assert_eq!(
        res.outcome,
        TurnOutcome::Bust {
            player_id: 0,
            attempted: 31
        }
    );
    assert_eq!(res.next.players[0], m.players[0]);
    assert_eq!(res.next.current_player_index, 1);
    assert!(res.next.winner_name.is_none());
}

#[test]
fn leaving_one_is_a_bust_under_both_rules() {
    for rule in [CheckoutRule::Double, CheckoutRule::Single] {
        let m = match_at(41, rule);
        let res = submit_raw_turn(&m, "40").unwrap();
        assert!(matches!(res.outcome, TurnOutcome::Bust { .. }), "{rule:?}");
        assert_eq!(res.next.players[0].remaining_score, 41);
        assert!(res.next.players[0].throw_history.is_empty());
        assert_eq!(res.next.current_player_index, 1);
    }
}

#[test]
fn double_out_rejects_unmarked_finish() {
    let m = match_at(40, CheckoutRule::Double);
    let res = submit_raw_turn(&m, "40").unwrap();

    assert_eq!(
        res.outcome,
        TurnOutcome::CheckoutRejected {
            player_id: 0,
            attempted: 40
        }
    );
    assert_eq!(res.outcome.message(), "You must finish on a double!");
    assert_eq!(res.next.players[0].remaining_score, 40);
    assert!(res.next.players[0].throw_history.is_empty());
    assert_eq!(res.next.current_player_index, 1);
    assert!(res.next.winner_name.is_none());
}

#[test]
fn double_out_accepts_marked_finish() {
    let m = match_at(40, CheckoutRule::Double);
    let res = submit_raw_turn(&m, "40d").unwrap();

    assert_eq!(
        res.outcome,
        TurnOutcome::Checkout {
            player_id: 0,
            winner_name: "P1".into()
        }
    );
    assert_eq!(res.next.players[0].remaining_score, 0);
    assert_eq!(res.next.players[0].throw_history, vec![40]);
    assert_eq!(res.next.winner_name.as_deref(), Some("P1"));
    // pointer stays on the winner
    assert_eq!(res.next.current_player_index, 0);
}

#[test]
fn single_out_accepts_unmarked_finish() {
    let m = match_at(40, CheckoutRule::Single);
    let res = submit_raw_turn(&m, "40").unwrap();
    assert!(matches!(res.outcome, TurnOutcome::Checkout { .. }));
    assert_eq!(res.next.winner_name.as_deref(), Some("P1"));
}

#[test]
fn double_marker_is_harmless_on_normal_turns() {
    let m = new_match(2, 501, CheckoutRule::Double);
    let res = submit_raw_turn(&m, "60d").unwrap();
    assert_eq!(res.next.players[0].remaining_score, 441);
}

#[test]
fn invalid_inputs_never_mutate() {
    let m = new_match(3, 501, CheckoutRule::Double);
    for raw in ["-5", "181", "abc", " ", "d"] {
        let err = submit_raw_turn(&m, raw).unwrap_err();
        assert_eq!(
            err.validation_kind(),
            Some(&ValidationKind::InvalidTurnScore),
            "input {raw:?}"
        );
    }
}

#[test]
fn empty_input_is_a_no_op() {
    let m = new_match(2, 501, CheckoutRule::Double);
    let res = submit_raw_turn(&m, "").unwrap();
    assert_eq!(res.outcome, TurnOutcome::Ignored);
    assert_eq!(res.next, m);
}

#[test]
fn rotation_wraps_with_three_players() {
    let mut m = new_match(3, 501, CheckoutRule::Double);
    m.current_player_index = 2;
    let res = submit_raw_turn(&m, "60").unwrap();
    assert_eq!(res.next.current_player_index, 0);
    assert_eq!(res.next.players[2].remaining_score, 441);
}

#[test]
fn completed_match_is_locked() {
    let m = match_at(40, CheckoutRule::Single);
    let won = submit_raw_turn(&m, "40").unwrap().next;

    for raw in ["20", "40d", "181", "abc", ""] {
        let res = submit_raw_turn(&won, raw).unwrap();
        assert_eq!(res.outcome, TurnOutcome::Ignored, "input {raw:?}");
        assert_eq!(res.next, won);
    }
    let res = submit_turn(&won, input(20, false)).unwrap();
    assert_eq!(res.next, won);
}

#[test]
fn broken_pointer_is_reported_not_panicked() {
    let mut m = new_match(2, 501, CheckoutRule::Double);
    m.current_player_index = 5;
    let err = submit_turn(&m, input(20, false)).unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(&ValidationKind::InvalidPlayerIndex)
    );
}

/// 501 double-out, two players, walked through every branch of the table.
#[test]
fn scenario_501_double_out() {
    let m = new_match(2, 501, CheckoutRule::Double);

    // P1 100 -> 401
    let m = submit_raw_turn(&m, "100").unwrap().next;
    assert_eq!(m.players[0].remaining_score, 401);
    assert_eq!(m.current_player_index, 1);

    // P2 "500" is out of range: rejected, P2 still up
    assert!(submit_raw_turn(&m, "500").is_err());

    // P2 170 -> 331
    let m = submit_raw_turn(&m, "170").unwrap().next;
    assert_eq!(m.players[1].remaining_score, 331);
    assert_eq!(m.current_player_index, 0);

    // P1 180 -> 221, P2 180 -> 151
    let m = submit_raw_turn(&m, "180").unwrap().next;
    let m = submit_raw_turn(&m, "180").unwrap().next;
    assert_eq!(m.players[0].remaining_score, 221);
    assert_eq!(m.players[1].remaining_score, 151);

    // P1 180 -> 41, P2 111 -> 40
    let m = submit_raw_turn(&m, "180").unwrap().next;
    let m = submit_raw_turn(&m, "111").unwrap().next;
    assert_eq!(m.players[0].remaining_score, 41);
    assert_eq!(m.players[1].remaining_score, 40);

    // P1 40 would leave 1: bust, stays on 41
    let res = submit_raw_turn(&m, "40").unwrap();
    assert!(matches!(res.outcome, TurnOutcome::Bust { .. }));
    let m = res.next;
    assert_eq!(m.players[0].remaining_score, 41);
    assert_eq!(m.players[0].throw_history, vec![100, 180, 180]);

    // P2 40 without a double: rejected checkout, stays on 40
    let res = submit_raw_turn(&m, "40").unwrap();
    assert!(matches!(res.outcome, TurnOutcome::CheckoutRejected { .. }));
    let m = res.next;
    assert_eq!(m.players[1].remaining_score, 40);
    assert_eq!(m.current_player_index, 0);

    // P1 9 -> 32
    let m = submit_raw_turn(&m, "9").unwrap().next;
    assert_eq!(m.players[0].remaining_score, 32);

    // P2 40d: checkout
    let res = submit_raw_turn(&m, "40d").unwrap();
    assert_eq!(
        res.outcome,
        TurnOutcome::Checkout {
            player_id: 1,
            winner_name: "P2".into()
        }
    );
    let m = res.next;
    assert_eq!(m.players[1].remaining_score, 0);
    assert_eq!(m.players[1].throw_history, vec![170, 180, 111, 40]);
    assert_eq!(m.current_player_index, 1);

    // locked
    let after = submit_raw_turn(&m, "32d").unwrap();
    assert_eq!(after.next, m);
}

#[test]
fn outcome_messages() {
    assert_eq!(
        TurnOutcome::Scored {
            player_id: 0,
            scored: 60,
            remaining: 441
        }
        .message(),
        "Scored 60, 441 remaining"
    );
    assert!(TurnOutcome::Bust {
        player_id: 0,
        attempted: 99
    }
    .message()
    .starts_with("Bust!"));
    assert_eq!(
        TurnOutcome::Checkout {
            player_id: 0,
            winner_name: "Ann".into()
        }
        .message(),
        "Ann wins!"
    );
}

#[test]
fn advanced_turn_flags() {
    assert!(!TurnOutcome::Ignored.advanced_turn());
    assert!(TurnOutcome::Bust {
        player_id: 0,
        attempted: 1
    }
    .advanced_turn());
    assert!(!TurnOutcome::Checkout {
        player_id: 0,
        winner_name: "x".into()
    }
    .advanced_turn());
}
