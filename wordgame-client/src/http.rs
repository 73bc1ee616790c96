use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use wordgame_types::{GameOutcome, NicknameCheck, ScoreEntry, ScoreQuery, ScoreResponse, WordEntry};

use crate::service::{GameService, ServiceError};

/// `GameService` over HTTP, speaking the word/score service's JSON API.
pub struct HttpGameService {
    client: Client,
    base_url: String,
}

impl HttpGameService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::rejection(response).await)
        }
    }

    async fn rejection(response: Response) -> ServiceError {
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| "unknown error".to_string());

        debug!(status, message = %message, "service rejected request");
        ServiceError::Rejected { status, message }
    }
}

#[async_trait]
impl GameService for HttpGameService {
    async fn categories(&self) -> Result<Vec<String>, ServiceError> {
        let response = self
            .client
            .get(self.url("/api/words/categories"))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn random_word(&self, category: &str) -> Result<Option<WordEntry>, ServiceError> {
        let response = self
            .client
            .get(self.url(&format!("/api/words/random/{category}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::expect_json(response).await?))
    }

    async fn check_nickname(&self, nickname: &str) -> Result<bool, ServiceError> {
        let response = self
            .client
            .get(self.url(&format!("/api/scores/check-nickname/{nickname}")))
            .send()
            .await?;

        let check: NicknameCheck = Self::expect_json(response).await?;
        Ok(check.unique)
    }

    async fn submit_outcome(&self, outcome: &GameOutcome) -> Result<ScoreEntry, ServiceError> {
        let response = self
            .client
            .post(self.url("/api/scores"))
            .json(outcome)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn calculate_score(&self, query: &ScoreQuery) -> Result<i32, ServiceError> {
        let response = self
            .client
            .post(self.url("/api/scores/calculate"))
            .json(query)
            .send()
            .await?;

        let body: ScoreResponse = Self::expect_json(response).await?;
        Ok(body.score)
    }

    async fn leaderboard(&self) -> Result<Vec<ScoreEntry>, ServiceError> {
        let response = self
            .client
            .get(self.url("/api/scores/leaderboard"))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn list_words(&self) -> Result<Vec<WordEntry>, ServiceError> {
        let response = self.client.get(self.url("/api/words")).send().await?;
        Self::expect_json(response).await
    }

    async fn add_word(&self, entry: &WordEntry) -> Result<bool, ServiceError> {
        let response = self
            .client
            .post(self.url("/api/words"))
            .json(entry)
            .send()
            .await?;

        // The service answers 409 for duplicates and malformed entries.
        if response.status() == StatusCode::CONFLICT {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(true)
    }

    async fn update_word(&self, old_word: &str, entry: &WordEntry) -> Result<bool, ServiceError> {
        let response = self
            .client
            .put(self.url(&format!("/api/words/{old_word}")))
            .json(entry)
            .send()
            .await?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(true)
    }

    async fn delete_word(&self, word: &str) -> Result<bool, ServiceError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/words/{word}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(true)
    }
}
