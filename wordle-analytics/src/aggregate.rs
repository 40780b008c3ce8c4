use wordle_types::{CompletedGame, GlobalStats, LeaderboardEntry};

use crate::stats::{round_to, user_stats};

/// Cross-user rollup. The store collaborator hands in one history slice
/// per user; this never walks the store itself.
pub fn global_stats(histories: &[&[CompletedGame]]) -> GlobalStats {
    let total_users = histories.len();
    let total_games: usize = histories.iter().map(|history| history.len()).sum();
    let total_wins = histories
        .iter()
        .flat_map(|history| history.iter())
        .filter(|game| game.won)
        .count();

    let win_rate_percent = if total_games > 0 {
        round_to(total_wins as f64 / total_games as f64 * 100.0, 1)
    } else {
        0.0
    };

    GlobalStats {
        total_users,
        total_games,
        total_wins,
        win_rate_percent,
    }
}

/// Leaderboard ranked by win rate, descending. Users without any
/// completed game are left out; ranks are 1-based positions after the
/// sort.
pub fn leaderboard(players: &[(&str, &[CompletedGame])]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .filter_map(|(name, history)| {
            user_stats(history).map(|stats| LeaderboardEntry {
                rank: 0,
                display_name: name.to_string(),
                games: stats.total_games,
                wins: stats.wins,
                win_rate_percent: stats.win_rate_percent,
                average_guesses_on_win: stats.average_guesses_on_win,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.win_rate_percent.total_cmp(&a.win_rate_percent));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    entries
}
