use wordle_types::{CompletedGame, TrendPoint};

/// Minimum history length before a trend is worth plotting.
const MIN_GAMES_FOR_TREND: usize = 5;

/// Rolling win-rate over a sliding window of recent games, one point per
/// window ending position, overlapping windows included. Empty until the
/// history reaches five games. Window size is min(10, half the history).
pub fn rolling_win_rate_trend(history: &[CompletedGame]) -> Vec<TrendPoint> {
    let total = history.len();
    if total < MIN_GAMES_FOR_TREND {
        return Vec::new();
    }

    let window = 10.min(total / 2);

    (window..=total)
        .map(|end| {
            let slice = &history[end - window..end];
            let wins = slice.iter().filter(|game| game.won).count();
            TrendPoint {
                label: format!("{}-{}", end - window + 1, end),
                win_rate_percent: wins as f64 / window as f64 * 100.0,
            }
        })
        .collect()
}
