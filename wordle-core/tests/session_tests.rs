mod common;

use common::*;
use wordle_core::{GameSession, board_rows, derive_keyboard_state};
use wordle_types::{GuessError, SessionState, Verdict};

#[test]
fn test_full_game_win() {
    let words = create_test_words();
    let mut session = create_session("steak");

    session.submit_guess(&words, "crane").unwrap();
    session.submit_guess(&words, "slate").unwrap();
    let outcome = session.submit_guess(&words, "steak").unwrap();

    assert_eq!(outcome.state, SessionState::Won);
    assert_eq!(outcome.guesses_remaining, 3);
    assert_eq!(outcome.target_word.as_deref(), Some("STEAK"));

    let completed = session.to_completed().unwrap();
    assert!(completed.won);
    assert_eq!(completed.guesses.len(), 3);
}

#[test]
fn test_full_game_loss() {
    let words = create_test_words();
    let mut session = create_session("grape");
    play_to_loss(&mut session, &words);

    assert_eq!(session.state, SessionState::Lost);
    assert_eq!(session.guesses_remaining(), 0);

    let completed = session.to_completed().unwrap();
    assert!(!completed.won);
    assert_eq!(completed.guesses.len(), 6);
    assert_eq!(completed.target_word, "GRAPE");
}

#[test]
fn test_random_start_and_reset() {
    let words = create_test_words();
    let mut rng = create_test_rng();

    let mut session = GameSession::start(&words, &mut rng).unwrap();
    assert!(words.contains(&session.target_word));
    assert_eq!(session.state, SessionState::InProgress);

    session.submit_guess(&words, "steak").ok();
    session.submit_guess(&words, "crane").ok();

    session.reset(&words, &mut rng).unwrap();
    assert!(session.guesses.is_empty());
    assert_eq!(session.state, SessionState::InProgress);
    assert_eq!(session.guesses_remaining(), 6);
    assert!(words.contains(&session.target_word));
}

#[test]
fn test_duplicate_guess_leaves_remaining_count_alone() {
    let words = create_test_words();
    let mut session = create_session("steak");

    session.submit_guess(&words, "crane").unwrap();
    let before = session.guesses_remaining();

    let err = session.submit_guess(&words, "crane").unwrap_err();
    assert!(matches!(err, GuessError::DuplicateGuess { .. }));
    assert_eq!(session.guesses_remaining(), before);
}

#[test]
fn test_keyboard_tracks_live_session() {
    let words = create_test_words();
    let mut session = create_session("steak");

    session.submit_guess(&words, "crane").unwrap();
    let state = derive_keyboard_state(&session.guesses);
    assert_eq!(state[&'A'], Verdict::Present);
    assert_eq!(state[&'E'], Verdict::Present);

    session.submit_guess(&words, "steak").unwrap();
    let state = derive_keyboard_state(&session.guesses);
    assert_eq!(state[&'A'], Verdict::Correct);
    assert_eq!(state[&'E'], Verdict::Correct);
    assert_eq!(state[&'C'], Verdict::Absent);
}

#[test]
fn test_board_rows_match_guess_log() {
    let words = create_test_words();
    let mut session = create_session("steak");
    session.submit_guess(&words, "crane").unwrap();
    session.submit_guess(&words, "slate").unwrap();

    let rows = board_rows(&session.guesses);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].guess_num, 1);
    let first: String = rows[0].cells.iter().map(|c| c.letter).collect();
    assert_eq!(first, "CRANE");
}
