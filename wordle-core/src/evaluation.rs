use wordle_types::Verdict;

/// Fixed word length for the puzzle.
pub const WORD_LENGTH: usize = 5;

/// Evaluate a guess against the target word, producing one verdict per
/// guess letter. Pure function; callers guarantee both inputs are
/// normalized and `WORD_LENGTH` letters long.
///
/// Two passes: exact positional matches first, each consuming its target
/// position; then the remaining guess letters scan left-to-right and
/// claim the lowest unconsumed target occurrence. With repeated letters
/// this means an earlier guess occurrence wins Present status over a
/// later one once the target runs out of copies.
pub fn evaluate(target: &str, guess: &str) -> Vec<Verdict> {
    let target_letters: Vec<char> = target.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();

    let mut verdicts = vec![Verdict::Absent; guess_letters.len()];
    let mut consumed = vec![false; target_letters.len()];

    // First pass: correct positions
    for (i, &letter) in guess_letters.iter().enumerate() {
        if target_letters.get(i) == Some(&letter) {
            verdicts[i] = Verdict::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: present letters, leftmost unconsumed occurrence first
    for (i, &letter) in guess_letters.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        for (j, &candidate) in target_letters.iter().enumerate() {
            if !consumed[j] && candidate == letter {
                verdicts[i] = Verdict::Present;
                consumed[j] = true;
                break;
            }
        }
    }

    verdicts
}
