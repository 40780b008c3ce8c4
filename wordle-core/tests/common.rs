use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_core::{GameSession, WordList};

/// Creates a test WordList with a known set of words
pub fn create_test_words() -> WordList {
    let source = "steak crane alloy lolly hello world round aunty mouse house \
                  train plane water stone bread cream slate grape";
    WordList::from_source(source)
}

/// Creates a seeded RNG so target selection is reproducible
pub fn create_test_rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

/// Creates a session with a fixed target word
pub fn create_session(target: &str) -> GameSession {
    GameSession::new(target)
}

/// Drives a session to a loss with six distinct misses
pub fn play_to_loss(session: &mut GameSession, words: &WordList) {
    let misses = ["crane", "alloy", "lolly", "hello", "world", "round"];
    for word in misses {
        if word.to_uppercase() != session.target_word {
            session.submit_guess(words, word).unwrap();
        } else {
            session.submit_guess(words, "mouse").unwrap();
        }
    }
}
