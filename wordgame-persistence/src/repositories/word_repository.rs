use anyhow::Result;
use rand::seq::SliceRandom;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::entities::{prelude::*, words};
use wordgame_types::WordEntry;

/// Catalog of playable words, keyed by the word itself.
pub struct WordRepository {
    db: DatabaseConnection,
}

impl WordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_entry(model: words::Model) -> WordEntry {
        WordEntry {
            word: model.word,
            category: model.category,
            hint: model.hint,
        }
    }

    /// All category names, sorted.
    pub async fn categories(&self) -> Result<Vec<String>> {
        let categories = Words::find()
            .select_only()
            .column(words::Column::Category)
            .distinct()
            .order_by_asc(words::Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(categories)
    }

    /// A random word from the category, or `None` when the category
    /// holds no words.
    pub async fn random_word(&self, category: &str) -> Result<Option<WordEntry>> {
        let candidates = Words::find()
            .filter(words::Column::Category.eq(category.to_lowercase()))
            .all(&self.db)
            .await?;

        Ok(candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .map(Self::model_to_entry))
    }

    pub async fn list(&self) -> Result<Vec<WordEntry>> {
        let models = Words::find()
            .order_by_asc(words::Column::Word)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::model_to_entry).collect())
    }

    /// Insert a word. Returns false when the word already exists.
    pub async fn add(&self, entry: &WordEntry) -> Result<bool> {
        let existing = Words::find_by_id(entry.word.clone()).one(&self.db).await?;
        if existing.is_some() {
            return Ok(false);
        }

        let model = words::ActiveModel {
            word: ActiveValue::Set(entry.word.clone()),
            category: ActiveValue::Set(entry.category.clone()),
            hint: ActiveValue::Set(entry.hint.clone()),
        };
        Words::insert(model).exec(&self.db).await?;

        Ok(true)
    }

    /// Replace `old_word` with a new record. The old entry is removed
    /// first, so renaming a word onto itself works; renaming onto a
    /// different existing word does not.
    pub async fn update(&self, old_word: &str, entry: &WordEntry) -> Result<bool> {
        Words::delete_by_id(old_word.to_lowercase())
            .exec(&self.db)
            .await?;

        self.add(entry).await
    }

    /// Remove a word. Returns false when it was not present.
    pub async fn delete(&self, word: &str) -> Result<bool> {
        let result = Words::delete_by_id(word.to_lowercase())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Words::find().count(&self.db).await?)
    }
}
