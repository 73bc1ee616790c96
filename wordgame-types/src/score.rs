use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Immutable record of a finished round, created once at the moment
/// the session is won. Input to score calculation and leaderboard
/// submission; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    pub nickname: String,
    pub elapsed_seconds: u32,
    pub attempts: u32,
    pub used_hint: bool,
}

/// One leaderboard row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub nickname: String,
    pub score: i32,
    pub elapsed_seconds: u32,
    pub attempts: u32,
    pub used_hint: bool,
    pub created_at: String, // ISO 8601 string
}
