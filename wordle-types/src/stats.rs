use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate statistics over one user's completed games. Derived on
/// demand from the history, never persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserStats {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate_percent: f64,        // rounded to 1 decimal
    pub average_guesses_on_win: f64,  // rounded to 2 decimals, 0.0 with no wins
    pub guess_distribution: [u32; 6], // wins bucketed by guess count
    pub current_streak: u32,
    pub max_streak: u32,
}

/// One point of the rolling win-rate trend. The label is the 1-based
/// game-number range the window covers, e.g. "3-8".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub label: String,
    pub win_rate_percent: f64,
}

/// One row of the per-user history table, most recent game first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryRow {
    pub game_num: usize,
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    pub completed_at: String, // RFC 3339 string
}

/// Cross-user rollup for the admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlobalStats {
    pub total_users: usize,
    pub total_games: usize,
    pub total_wins: usize,
    pub win_rate_percent: f64, // rounded to 1 decimal
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub display_name: String,
    pub games: usize,
    pub wins: usize,
    pub win_rate_percent: f64,
    pub average_guesses_on_win: f64,
}
