//! Property-based tests for the turn decision table.

use darts_test_support::proptest_prelude::proptest_config;
use proptest::prelude::*;

use crate::domain::state::{next_player_index, CheckoutRule};
use crate::domain::test_gens;
use crate::domain::turns::{submit_raw_turn, submit_turn, TurnOutcome};
use crate::domain::TurnInput;
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: a turn leaving more than one is applied exactly.
    #[test]
    fn prop_normal_turn_is_exact(
        (m, total) in test_gens::match_and_normal_total(),
        double in any::<bool>(),
    ) {
        let idx = m.current_player_index;
        let res = submit_turn(&m, TurnInput::new(total, double).unwrap()).unwrap();

        prop_assert_eq!(
            res.next.players[idx].remaining_score,
            m.players[idx].remaining_score - total
        );
        prop_assert_eq!(
            res.next.players[idx].throw_history.len(),
            m.players[idx].throw_history.len() + 1
        );
        prop_assert_eq!(res.next.players[idx].throw_history.last().copied(), Some(total));
        prop_assert_eq!(
            res.next.current_player_index,
            next_player_index(idx, m.players.len())
        );
        prop_assert!(res.next.winner_name.is_none());
    }

    /// Property: over-shooting busts, the score stands and play passes on.
    #[test]
    fn prop_overshoot_busts((m, total) in test_gens::match_and_overshoot()) {
        let idx = m.current_player_index;
        let res = submit_turn(&m, TurnInput::new(total, true).unwrap()).unwrap();

        prop_assert!(matches!(res.outcome, TurnOutcome::Bust { .. }), "outcome: {:?}", res.outcome);
        prop_assert_eq!(&res.next.players, &m.players);
        prop_assert_eq!(
            res.next.current_player_index,
            next_player_index(idx, m.players.len())
        );
    }

    /// Property: leaving exactly one busts, whatever the marker or rule.
    #[test]
    fn prop_leaving_one_busts(
        (m, total) in test_gens::match_and_total_leaving(1),
        double in any::<bool>(),
    ) {
        let res = submit_turn(&m, TurnInput::new(total, double).unwrap()).unwrap();
        prop_assert!(matches!(res.outcome, TurnOutcome::Bust { .. }), "expected TurnOutcome::Bust");
        prop_assert_eq!(&res.next.players, &m.players);
    }

    /// Property: an exact finish wins unless double-out demands a marker.
    #[test]
    fn prop_exact_finish_respects_rule(
        (m, total) in test_gens::match_and_total_leaving(0),
        double in any::<bool>(),
    ) {
        let idx = m.current_player_index;
        let res = submit_turn(&m, TurnInput::new(total, double).unwrap()).unwrap();
        let must_reject = m.config.checkout_rule == CheckoutRule::Double && !double;

        if must_reject {
            prop_assert!(matches!(res.outcome, TurnOutcome::CheckoutRejected { .. }), "expected TurnOutcome::CheckoutRejected");
            prop_assert_eq!(&res.next.players, &m.players);
            prop_assert!(res.next.winner_name.is_none());
            prop_assert_eq!(
                res.next.current_player_index,
                next_player_index(idx, m.players.len())
            );
        } else {
            prop_assert!(matches!(res.outcome, TurnOutcome::Checkout { .. }), "expected TurnOutcome::Checkout");
            prop_assert_eq!(res.next.players[idx].remaining_score, 0);
            prop_assert_eq!(res.next.winner_name.as_ref(), Some(&m.players[idx].name));
            prop_assert_eq!(res.next.current_player_index, idx);
        }
    }

    /// Property: out-of-range or non-numeric text is a score validation
    /// error, never a resolved turn.
    #[test]
    fn prop_invalid_input_is_rejected_as_turn_score(
        m in test_gens::in_progress_match(),
        raw in prop_oneof![
            (181u32..100_000).prop_map(|n| n.to_string()),
            (1u32..100_000).prop_map(|n| format!("-{n}")),
            "[a-ce-zA-CE-Z]{1,6}",
        ],
    ) {
        let err = submit_raw_turn(&m, &raw).unwrap_err();
        prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidTurnScore));
    }

    /// Property: scores never rest at one or rise above the start, across
    /// any sequence of valid turns.
    #[test]
    fn prop_scores_stay_in_bounds(
        m in test_gens::in_progress_match(),
        turns in proptest::collection::vec((test_gens::turn_total(), any::<bool>()), 1..40),
    ) {
        let start = m.config.starting_score;
        let mut m = m;
        for (total, double) in turns {
            let was_complete = m.is_complete();
            let before = m.clone();
            m = submit_turn(&m, TurnInput::new(total, double).unwrap()).unwrap().next;

            if was_complete {
                prop_assert_eq!(&m, &before);
            }
            for p in &m.players {
                prop_assert!(p.remaining_score <= start);
                prop_assert!(p.remaining_score != 1);
                prop_assert!(p.remaining_score != 0 || m.winner_name.as_ref() == Some(&p.name));
            }
        }
    }
}
