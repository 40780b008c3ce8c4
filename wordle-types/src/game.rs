use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-letter outcome of a guess. Variant order matters: `Ord` ranks
/// verdicts by informativeness (Absent < Present < Correct), which the
/// keyboard aggregator relies on for its upgrade-only rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Verdict {
    Absent,  // Gray - letter not available to match
    Present, // Yellow - correct letter in wrong position
    Correct, // Green - correct letter in correct position
}

/// One submitted guess and its evaluation. Created only by the session;
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Guess {
    pub word: String,
    pub verdict: Vec<Verdict>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::InProgress)
    }
}

/// Result of a successful guess submission. The target word is withheld
/// until the session is terminal so clients never see the answer early.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessOutcome {
    pub verdict: Vec<Verdict>,
    pub state: SessionState,
    pub guesses_remaining: usize,
    pub target_word: Option<String>,
}

/// Immutable snapshot of a finished session, appended to a user's
/// history by the owning collaborator. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedGame {
    pub target_word: String,
    pub guesses: Vec<Guess>,
    pub won: bool,
    pub started_at: String,   // RFC 3339 string
    pub completed_at: String, // RFC 3339 string
    pub duration_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoardCell {
    pub letter: char,
    pub verdict: Verdict,
}

/// One rendered-ready row of the game board, 1-based guess number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoardRow {
    pub guess_num: usize,
    pub cells: Vec<BoardCell>,
}
