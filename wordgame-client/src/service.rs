use async_trait::async_trait;
use thiserror::Error;
use wordgame_types::{GameOutcome, ScoreEntry, ScoreQuery, WordEntry};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// The word/score service as seen by a presentation layer. One method
/// per interaction; transports are swappable so UIs can be tested
/// against an in-memory implementation.
#[async_trait]
pub trait GameService: Send + Sync {
    async fn categories(&self) -> Result<Vec<String>, ServiceError>;

    /// `None` when the category holds no words.
    async fn random_word(&self, category: &str) -> Result<Option<WordEntry>, ServiceError>;

    async fn check_nickname(&self, nickname: &str) -> Result<bool, ServiceError>;

    /// Submit a finished round; the service computes and stores the
    /// score and returns the saved leaderboard row.
    async fn submit_outcome(&self, outcome: &GameOutcome) -> Result<ScoreEntry, ServiceError>;

    /// Score an outcome without saving it.
    async fn calculate_score(&self, query: &ScoreQuery) -> Result<i32, ServiceError>;

    async fn leaderboard(&self) -> Result<Vec<ScoreEntry>, ServiceError>;

    // Word catalog administration
    async fn list_words(&self) -> Result<Vec<WordEntry>, ServiceError>;
    async fn add_word(&self, entry: &WordEntry) -> Result<bool, ServiceError>;
    async fn update_word(&self, old_word: &str, entry: &WordEntry) -> Result<bool, ServiceError>;
    async fn delete_word(&self, word: &str) -> Result<bool, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wordgame_core::{GameSession, GuessFeedback, ScoreCalculator, SessionStatus};

    /// In-memory stand-in for the remote service, mirroring its
    /// scoring and uniqueness rules.
    struct FakeService {
        words: Vec<WordEntry>,
        scores: Mutex<Vec<ScoreEntry>>,
    }

    impl FakeService {
        fn new(words: Vec<WordEntry>) -> Self {
            Self {
                words,
                scores: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GameService for FakeService {
        async fn categories(&self) -> Result<Vec<String>, ServiceError> {
            let mut categories: Vec<String> =
                self.words.iter().map(|w| w.category.clone()).collect();
            categories.sort();
            categories.dedup();
            Ok(categories)
        }

        async fn random_word(&self, category: &str) -> Result<Option<WordEntry>, ServiceError> {
            Ok(self
                .words
                .iter()
                .find(|w| w.category == category.to_lowercase())
                .cloned())
        }

        async fn check_nickname(&self, nickname: &str) -> Result<bool, ServiceError> {
            let scores = self.scores.lock().unwrap();
            Ok(!scores
                .iter()
                .any(|s| s.nickname.eq_ignore_ascii_case(nickname)))
        }

        async fn submit_outcome(&self, outcome: &GameOutcome) -> Result<ScoreEntry, ServiceError> {
            let entry = ScoreEntry {
                nickname: outcome.nickname.clone(),
                score: ScoreCalculator::score_outcome(outcome),
                elapsed_seconds: outcome.elapsed_seconds,
                attempts: outcome.attempts,
                used_hint: outcome.used_hint,
                created_at: "2024-01-01T00:00:00Z".to_string(),
            };
            self.scores.lock().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn calculate_score(&self, query: &ScoreQuery) -> Result<i32, ServiceError> {
            Ok(ScoreCalculator::calculate(
                query.elapsed_seconds,
                query.attempts,
                query.used_hint,
            ))
        }

        async fn leaderboard(&self) -> Result<Vec<ScoreEntry>, ServiceError> {
            let mut entries = self.scores.lock().unwrap().clone();
            entries.sort_by(|a, b| b.score.cmp(&a.score));
            Ok(entries)
        }

        async fn list_words(&self) -> Result<Vec<WordEntry>, ServiceError> {
            Ok(self.words.clone())
        }

        async fn add_word(&self, _entry: &WordEntry) -> Result<bool, ServiceError> {
            Ok(true)
        }

        async fn update_word(
            &self,
            _old_word: &str,
            _entry: &WordEntry,
        ) -> Result<bool, ServiceError> {
            Ok(true)
        }

        async fn delete_word(&self, _word: &str) -> Result<bool, ServiceError> {
            Ok(true)
        }
    }

    /// Full round against the service trait: pick a category, fetch a
    /// word, play the session to a win, submit, read the leaderboard.
    #[tokio::test]
    async fn test_round_trip_through_the_service_contract() {
        let service = FakeService::new(vec![WordEntry::new(
            "animals",
            "cat",
            "Small domestic feline",
        )]);

        assert!(service.check_nickname("alice").await.unwrap());

        let categories = service.categories().await.unwrap();
        assert_eq!(categories, vec!["animals".to_string()]);

        let word = service
            .random_word(&categories[0])
            .await
            .unwrap()
            .expect("seeded category has a word");

        let mut session = GameSession::start("alice", word).unwrap();
        for _ in 0..12 {
            session.tick();
        }

        session.submit_guess("a").unwrap();
        session.submit_guess("t").unwrap();
        let outcome = match session.submit_guess("c") {
            Ok(GuessFeedback::Won(outcome)) => outcome,
            other => panic!("expected a win, got {other:?}"),
        };
        assert_eq!(session.status(), SessionStatus::Won);

        let saved = service.submit_outcome(&outcome).await.unwrap();
        assert_eq!(saved.score, 988);

        let leaderboard = service.leaderboard().await.unwrap();
        assert_eq!(leaderboard.len(), 1);
        assert_eq!(leaderboard[0].nickname, "alice");

        // Nickname is taken now
        assert!(!service.check_nickname("ALICE").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_category_yields_no_word() {
        let service = FakeService::new(vec![]);
        assert!(service.random_word("animals").await.unwrap().is_none());
    }
}
