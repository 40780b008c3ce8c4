use wordle_types::{CompletedGame, HistoryRow};

/// Flatten a user's history into table rows, most recent game first.
/// Game numbers stay 1-based in chronological order, so the newest game
/// carries the highest number.
pub fn history_rows(history: &[CompletedGame]) -> Vec<HistoryRow> {
    history
        .iter()
        .enumerate()
        .rev()
        .map(|(index, game)| HistoryRow {
            game_num: index + 1,
            word: game.target_word.clone(),
            won: game.won,
            guesses: game.guesses.len(),
            completed_at: game.completed_at.clone(),
        })
        .collect()
}
