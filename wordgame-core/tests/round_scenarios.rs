mod common;

use common::*;
use wordgame_core::{GuessFeedback, ScoreCalculator, SessionStatus};

/// Full round as a player would play it: twelve seconds on the clock,
/// three correct letters in a row, no hint.
#[test]
fn test_clean_round_scores_988() {
    let mut session = start_cat_session();

    for _ in 0..12 {
        session.tick();
    }

    assert!(matches!(
        session.submit_guess("a"),
        Ok(GuessFeedback::Hit)
    ));
    assert!(matches!(
        session.submit_guess("t"),
        Ok(GuessFeedback::Hit)
    ));

    let outcome = match session.submit_guess("c") {
        Ok(GuessFeedback::Won(outcome)) => outcome,
        other => panic!("expected the final letter to win, got {other:?}"),
    };

    assert_eq!(session.status(), SessionStatus::Won);
    assert_eq!(outcome.nickname, "alice");
    assert_eq!(outcome.elapsed_seconds, 12);
    assert_eq!(outcome.attempts, 0);
    assert!(!outcome.used_hint);
    assert_eq!(ScoreCalculator::score_outcome(&outcome), 988);
}

/// A rougher round: wrong letters, a failed word guess and a hint all
/// show up in the final score.
#[test]
fn test_messy_round_accumulates_penalties() {
    let mut session = start_cat_session();

    session.tick();
    session.tick();

    session.submit_guess("x").expect("wrong letter accepted");
    session.submit_guess("dog").expect("wrong word accepted");
    session.use_hint();

    let outcome = match session.submit_guess("cat") {
        Ok(GuessFeedback::Won(outcome)) => outcome,
        other => panic!("expected the word guess to win, got {other:?}"),
    };

    assert_eq!(outcome.elapsed_seconds, 2);
    assert_eq!(outcome.attempts, 2);
    assert!(outcome.used_hint);
    // 1000 - 2 - 2*50 - 200
    assert_eq!(ScoreCalculator::score_outcome(&outcome), 698);
}

/// Once the round is over nothing moves: no ticks, no guesses, no
/// second win.
#[test]
fn test_terminal_state_is_inert() {
    let mut session = start_cat_session();
    session.submit_guess("cat").expect("winning guess");

    let frozen = session.outcome().expect("won round has an outcome");

    session.tick();
    session.use_hint();
    assert!(session.submit_guess("c").is_err());

    assert_eq!(session.outcome().expect("still won"), frozen);
}
