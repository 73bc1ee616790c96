use std::collections::BTreeSet;

use anyhow::{Result, anyhow};
use tracing::debug;
use wordgame_types::{GameOutcome, GuessError, WordEntry};

use crate::word_validation::WordValidator;

/// Masked-letter symbol shown for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Won,
    Abandoned,
}

/// What an accepted guess did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessFeedback {
    /// Single letter that is in the word.
    Hit,
    /// Single letter not in the word; one attempt charged.
    Miss,
    /// Whole-word guess that did not match; one attempt charged.
    WrongWord,
    /// The puzzle is complete. Carries the outcome snapshot taken at
    /// the moment of the win.
    Won(GameOutcome),
}

/// State of exactly one guessing round.
///
/// The session is driven entirely by discrete events from its owner:
/// guesses, hint requests, one `tick` per elapsed second and an
/// optional quit. It never schedules anything itself, which keeps the
/// whole state machine synchronous and directly testable.
#[derive(Debug)]
pub struct GameSession {
    word: WordEntry,
    nickname: String,
    guessed_letters: BTreeSet<char>,
    attempts: u32,
    elapsed_seconds: u32,
    used_hint: bool,
    status: SessionStatus,
}

impl GameSession {
    /// Start a round for `nickname` on the given word. The caller is
    /// expected to have validated nickname uniqueness already; the
    /// word itself must be non-empty lowercase ascii.
    pub fn start(nickname: impl Into<String>, word: WordEntry) -> Result<Self> {
        if !WordValidator::is_lowercase_word(&word.word) {
            return Err(anyhow!("word is not playable: {:?}", word.word));
        }

        Ok(Self {
            word,
            nickname: nickname.into(),
            guessed_letters: BTreeSet::new(),
            attempts: 0,
            elapsed_seconds: 0,
            used_hint: false,
            status: SessionStatus::Active,
        })
    }

    /// Advance the clock by one second. Safe to call after the round
    /// has ended; a stray tick from a not-yet-cancelled timer must not
    /// inflate the final time.
    pub fn tick(&mut self) {
        if self.status == SessionStatus::Active {
            self.elapsed_seconds += 1;
        }
    }

    /// Evaluate a letter or whole-word guess.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessFeedback, GuessError> {
        let guess = input.to_lowercase();
        if guess.is_empty() || !guess.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GuessError::InvalidInput);
        }

        if self.status != SessionStatus::Active {
            return Err(GuessError::AlreadyGameOver);
        }

        let feedback = if guess.chars().count() == 1 {
            let letter = guess.as_bytes()[0] as char;
            if self.guessed_letters.contains(&letter) {
                return Err(GuessError::DuplicateGuess);
            }

            self.guessed_letters.insert(letter);
            if self.word.word.contains(letter) {
                GuessFeedback::Hit
            } else {
                self.attempts += 1;
                GuessFeedback::Miss
            }
        } else if guess == self.word.word {
            // Solving the whole word reveals every letter at once.
            self.guessed_letters.extend(self.word.word.chars());
            GuessFeedback::Hit
        } else {
            self.attempts += 1;
            GuessFeedback::WrongWord
        };

        // The letter set may have just changed; the status guard makes
        // sure the Won transition fires exactly once.
        if self.status == SessionStatus::Active && self.is_complete() {
            self.status = SessionStatus::Won;
            let outcome = self.snapshot_outcome();
            debug!(
                word = %self.word.word,
                elapsed_seconds = outcome.elapsed_seconds,
                attempts = outcome.attempts,
                "round won"
            );
            return Ok(GuessFeedback::Won(outcome));
        }

        Ok(feedback)
    }

    /// Reveal the hint. One-way; only changes the eventual score.
    pub fn use_hint(&mut self) {
        if self.status == SessionStatus::Active {
            self.used_hint = true;
        }
    }

    /// Abandon the round without scoring.
    pub fn quit(&mut self) {
        if self.status == SessionStatus::Active {
            self.status = SessionStatus::Abandoned;
            debug!(word = %self.word.word, "round abandoned");
        }
    }

    /// The puzzle mask: one symbol per letter of the word, space
    /// separated, with unguessed letters shown as the placeholder.
    /// Always derived from the guessed set, never stored.
    pub fn display_word(&self) -> String {
        let mut display = String::with_capacity(self.word.word.len() * 2);
        for (i, letter) in self.word.word.chars().enumerate() {
            if i > 0 {
                display.push(' ');
            }
            if self.guessed_letters.contains(&letter) {
                display.push(letter);
            } else {
                display.push(PLACEHOLDER);
            }
        }
        display
    }

    /// The finished-round record, available only once the round is won.
    pub fn outcome(&self) -> Option<GameOutcome> {
        (self.status == SessionStatus::Won).then(|| self.snapshot_outcome())
    }

    fn snapshot_outcome(&self) -> GameOutcome {
        GameOutcome {
            nickname: self.nickname.clone(),
            elapsed_seconds: self.elapsed_seconds,
            attempts: self.attempts,
            used_hint: self.used_hint,
        }
    }

    fn is_complete(&self) -> bool {
        self.word
            .word
            .chars()
            .all(|letter| self.guessed_letters.contains(&letter))
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn word(&self) -> &WordEntry {
        &self.word
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn used_hint(&self) -> bool {
        self.used_hint
    }
}
