//! Tests for the typestate session phases.

use std::sync::Arc;

use binary_words::{
    Choice, LetterSequence, SessionError, SessionIdle, SessionInProgress, SessionResult,
    SessionView, WordList,
};

fn list() -> Arc<WordList> {
    Arc::new(WordList::new(
        "t",
        "Test",
        ["Necessary", "Toothbrush", "Remember", "Impression"],
    ))
}

#[test]
fn test_typestate_lifecycle() {
    let idle = SessionIdle::new(LetterSequence::new("NT").expect("Valid letters"));
    let session = idle.select_word_list(list());
    assert_eq!(session.step_index(), 0);
    assert_eq!(session.pools().left().len(), 4);

    let session = match session.apply_choice(Choice::Left).expect("Valid choice") {
        SessionResult::InProgress(s) => s,
        SessionResult::Complete(_) => panic!("One letter remains"),
    };
    assert_eq!(session.history(), &[Choice::Left]);

    match session.apply_choice(Choice::Left).expect("Valid choice") {
        SessionResult::Complete(done) => {
            assert!(done.is_complete());
            assert_eq!(done.used_letters(), &['N', 'T']);
        }
        SessionResult::InProgress(_) => panic!("Sequence exhausted"),
    }
}

#[test]
fn test_replay_from_history() {
    let letters = LetterSequence::new("NTR").expect("Valid letters");
    let result = SessionInProgress::replay(list(), letters, &[Choice::Left, Choice::Right])
        .expect("Valid replay");

    match result {
        SessionResult::InProgress(session) => {
            assert_eq!(session.step_index(), 2);
            assert_eq!(session.pools().left(), &["Necessary", "Impression"]);
        }
        SessionResult::Complete(_) => panic!("One letter remains"),
    }
}

#[test]
fn test_replay_rejects_overlong_history() {
    let letters = LetterSequence::new("N").expect("Valid letters");
    let result = SessionInProgress::replay(list(), letters, &[Choice::Left, Choice::Left]);
    assert!(matches!(result, Err(SessionError::InvalidState(_))));
}

#[test]
fn test_complete_reset_returns_to_start() {
    let letters = LetterSequence::new("N").expect("Valid letters");
    let done = match SessionInProgress::start(list(), letters)
        .apply_choice(Choice::Right)
        .expect("Valid choice")
    {
        SessionResult::Complete(done) => done,
        SessionResult::InProgress(_) => panic!("Single letter should complete"),
    };

    let fresh = done.reset();
    assert_eq!(fresh.step_index(), 0);
    assert!(fresh.history().is_empty());
    assert_eq!(fresh.pools().right().len(), 4);
}
