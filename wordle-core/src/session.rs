use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::evaluation::{WORD_LENGTH, evaluate};
use crate::word_list::WordList;
use wordle_types::{CompletedGame, Guess, GuessError, GuessOutcome, SessionState};

/// Guesses allowed before a session is lost.
pub const MAX_GUESSES: usize = 6;

pub type SessionId = Uuid;

/// One attempt at a single target word. InProgress until the target is
/// guessed (Won) or the guess budget runs out (Lost); terminal states
/// admit no further transitions. Callers must serialize mutating calls
/// to a given session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: SessionId,
    pub target_word: String, // Hidden from clients until terminal
    pub guesses: Vec<Guess>,
    pub state: SessionState,
    pub max_guesses: usize,
    pub started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(target_word: &str) -> Self {
        Self::with_max_guesses(target_word, MAX_GUESSES)
    }

    pub fn with_max_guesses(target_word: &str, max_guesses: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            target_word: target_word.trim().to_uppercase(),
            guesses: Vec::new(),
            state: SessionState::InProgress,
            max_guesses,
            started_at: Utc::now(),
        }
    }

    /// Start a session with a target drawn uniformly at random from the
    /// word list.
    pub fn start(words: &WordList, rng: &mut impl Rng) -> Result<Self> {
        let session = Self::new(words.random_word(rng)?);
        info!("started session {}", session.id);
        Ok(session)
    }

    /// Submit one guess. Validation fully precedes mutation: on any
    /// error the session is unchanged. The outcome carries the target
    /// word only once the session is terminal.
    pub fn submit_guess(
        &mut self,
        words: &WordList,
        raw: &str,
    ) -> std::result::Result<GuessOutcome, GuessError> {
        let word = raw.trim().to_uppercase();

        if self.state.is_terminal() {
            return Err(GuessError::GameAlreadyOver);
        }
        if word.chars().count() != WORD_LENGTH {
            return Err(GuessError::InvalidLength {
                expected: WORD_LENGTH,
            });
        }
        if !words.contains(&word) {
            return Err(GuessError::NotInWordList { word });
        }
        if self.guesses.iter().any(|g| g.word == word) {
            return Err(GuessError::DuplicateGuess { word });
        }

        let verdict = evaluate(&self.target_word, &word);
        let won = word == self.target_word;
        self.guesses.push(Guess {
            word,
            verdict: verdict.clone(),
        });

        if won {
            self.state = SessionState::Won;
            info!("session {} won in {} guesses", self.id, self.guesses.len());
        } else if self.guesses.len() == self.max_guesses {
            self.state = SessionState::Lost;
            info!("session {} lost", self.id);
        } else {
            debug!(
                "session {}: {} guesses remaining",
                self.id,
                self.guesses_remaining()
            );
        }

        Ok(GuessOutcome {
            verdict,
            state: self.state,
            guesses_remaining: self.guesses_remaining(),
            target_word: self
                .state
                .is_terminal()
                .then(|| self.target_word.clone()),
        })
    }

    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }

    /// Re-select a target uniformly at random and clear the guess log,
    /// returning the session to InProgress.
    pub fn reset(&mut self, words: &WordList, rng: &mut impl Rng) -> Result<()> {
        self.target_word = words.random_word(rng)?.to_string();
        self.guesses.clear();
        self.state = SessionState::InProgress;
        self.started_at = Utc::now();
        debug!("session {} reset", self.id);
        Ok(())
    }

    /// Snapshot a terminal session for the user's history. `None` while
    /// the session is still in progress.
    pub fn to_completed(&self) -> Option<CompletedGame> {
        if !self.state.is_terminal() {
            return None;
        }
        let completed_at = Utc::now();
        Some(CompletedGame {
            target_word: self.target_word.clone(),
            guesses: self.guesses.clone(),
            won: self.state == SessionState::Won,
            started_at: self.started_at.to_rfc3339(),
            completed_at: completed_at.to_rfc3339(),
            duration_ms: (completed_at - self.started_at).num_milliseconds(),
        })
    }
}
