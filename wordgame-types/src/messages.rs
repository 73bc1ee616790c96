use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of a score calculation request; the same figures as a
/// `GameOutcome` minus the nickname.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuery {
    pub elapsed_seconds: u32,
    pub attempts: u32,
    pub used_hint: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResponse {
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NicknameCheck {
    pub unique: bool,
}
