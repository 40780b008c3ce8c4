use tracing::debug;
use wordle_types::{CompletedGame, UserStats};

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Aggregate statistics over one user's completed-game history,
/// recomputed on demand. An empty history is "no data", not a zero-filled
/// struct; the caller picks the presentation for `None`.
pub fn user_stats(history: &[CompletedGame]) -> Option<UserStats> {
    if history.is_empty() {
        return None;
    }

    let total_games = history.len();
    let wins = history.iter().filter(|game| game.won).count();
    let losses = total_games - wins;

    let mut guess_distribution = [0u32; 6];
    let mut winning_guesses = 0usize;
    for game in history.iter().filter(|game| game.won) {
        let count = game.guesses.len();
        winning_guesses += count;
        // A win recorded with a guess count outside 1..=6 stays in the
        // win total and the average but is dropped from the histogram.
        if (1..=6).contains(&count) {
            guess_distribution[count - 1] += 1;
        }
    }

    let average_guesses_on_win = if wins > 0 {
        round_to(winning_guesses as f64 / wins as f64, 2)
    } else {
        0.0
    };

    debug!("derived stats over {} completed games", total_games);

    Some(UserStats {
        total_games,
        wins,
        losses,
        win_rate_percent: round_to(wins as f64 / total_games as f64 * 100.0, 1),
        average_guesses_on_win,
        guess_distribution,
        current_streak: current_streak(history),
        max_streak: max_streak(history),
    })
}

/// Consecutive wins counting back from the most recent game, stopping at
/// the first loss.
pub fn current_streak(history: &[CompletedGame]) -> u32 {
    history.iter().rev().take_while(|game| game.won).count() as u32
}

/// Longest run of consecutive wins anywhere in the history.
pub fn max_streak(history: &[CompletedGame]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    for game in history {
        if game.won {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
