use std::collections::HashMap;

use wordle_types::{Guess, Verdict};

/// Derive the best-known verdict per letter across a whole guess log.
/// A letter's entry only ever upgrades (Absent -> Present -> Correct);
/// letters never guessed have no entry at all.
pub fn derive_keyboard_state(guesses: &[Guess]) -> HashMap<char, Verdict> {
    let mut state = HashMap::new();

    for guess in guesses {
        for (letter, &verdict) in guess.word.chars().zip(guess.verdict.iter()) {
            state
                .entry(letter)
                .and_modify(|best: &mut Verdict| {
                    if verdict > *best {
                        *best = verdict;
                    }
                })
                .or_insert(verdict);
        }
    }

    state
}
