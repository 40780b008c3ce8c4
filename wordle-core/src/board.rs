use wordle_types::{BoardCell, BoardRow, Guess};

/// Flatten a guess log into display-ready board rows. Pure derivation
/// over the log as a value; the rendering collaborator owns colors and
/// layout.
pub fn board_rows(guesses: &[Guess]) -> Vec<BoardRow> {
    guesses
        .iter()
        .enumerate()
        .map(|(index, guess)| BoardRow {
            guess_num: index + 1,
            cells: guess
                .word
                .chars()
                .zip(guess.verdict.iter())
                .map(|(letter, &verdict)| BoardCell { letter, verdict })
                .collect(),
        })
        .collect()
}
