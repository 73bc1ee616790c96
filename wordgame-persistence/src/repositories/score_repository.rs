use anyhow::Result;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::entities::{prelude::*, scores};
use wordgame_types::{GameOutcome, ScoreEntry};

/// Finished-round records backing the leaderboard.
pub struct ScoreRepository {
    db: DatabaseConnection,
}

impl ScoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_entry(model: scores::Model) -> ScoreEntry {
        ScoreEntry {
            nickname: model.nickname,
            score: model.score,
            elapsed_seconds: model.elapsed_seconds as u32,
            attempts: model.attempts as u32,
            used_hint: model.used_hint,
            created_at: model.created_at.to_rfc3339(),
        }
    }

    /// Persist an outcome with its computed score.
    pub async fn add(&self, outcome: &GameOutcome, score: i32) -> Result<ScoreEntry> {
        let model = scores::ActiveModel {
            id: ActiveValue::NotSet,
            nickname: ActiveValue::Set(outcome.nickname.clone()),
            score: ActiveValue::Set(score),
            elapsed_seconds: ActiveValue::Set(outcome.elapsed_seconds as i32),
            attempts: ActiveValue::Set(outcome.attempts as i32),
            used_hint: ActiveValue::Set(outcome.used_hint),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let inserted = Scores::insert(model).exec(&self.db).await?;

        let saved = Scores::find_by_id(inserted.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("failed to retrieve saved score"))?;

        Ok(Self::model_to_entry(saved))
    }

    /// Best scores first, at most `limit` rows.
    pub async fn top_scores(&self, limit: u64) -> Result<Vec<ScoreEntry>> {
        let models = Scores::find()
            .order_by_desc(scores::Column::Score)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::model_to_entry).collect())
    }

    /// Case-insensitive check against every stored nickname.
    pub async fn is_nickname_unique(&self, nickname: &str) -> Result<bool> {
        let taken = Scores::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(scores::Column::Nickname)))
                    .eq(nickname.to_lowercase()),
            )
            .count(&self.db)
            .await?;

        Ok(taken == 0)
    }
}
