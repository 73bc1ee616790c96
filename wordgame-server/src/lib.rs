use std::sync::Arc;
use warp::Filter;
use warp::http::StatusCode;

use wordgame_core::{ScoreCalculator, WordValidator};
use wordgame_persistence::repositories::{ScoreRepository, WordRepository};
use wordgame_types::{GameOutcome, NicknameCheck, ScoreQuery, ScoreResponse, WordEntry};

pub mod config;
pub mod seed;

const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn create_routes(
    word_repository: Arc<WordRepository>,
    score_repository: Arc<ScoreRepository>,
    leaderboard_limit: u64,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let word_repository_filter = warp::any().map({
        let word_repository = word_repository.clone();
        move || word_repository.clone()
    });

    let score_repository_filter = warp::any().map({
        let score_repository = score_repository.clone();
        move || score_repository.clone()
    });

    let limit_filter = warp::any().map(move || leaderboard_limit);

    // Health check endpoint
    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    // Word catalog endpoints
    let categories = warp::path!("api" / "words" / "categories")
        .and(warp::get())
        .and(word_repository_filter.clone())
        .and_then(handle_categories);

    let random_word = warp::path!("api" / "words" / "random" / String)
        .and(warp::get())
        .and(word_repository_filter.clone())
        .and_then(handle_random_word);

    let list_words = warp::path!("api" / "words")
        .and(warp::get())
        .and(word_repository_filter.clone())
        .and_then(handle_list_words);

    let add_word = warp::path!("api" / "words")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(word_repository_filter.clone())
        .and_then(handle_add_word);

    let update_word = warp::path!("api" / "words" / String)
        .and(warp::put())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(word_repository_filter.clone())
        .and_then(handle_update_word);

    let delete_word = warp::path!("api" / "words" / String)
        .and(warp::delete())
        .and(word_repository_filter.clone())
        .and_then(handle_delete_word);

    // Score endpoints
    let leaderboard = warp::path!("api" / "scores" / "leaderboard")
        .and(warp::get())
        .and(score_repository_filter.clone())
        .and(limit_filter)
        .and_then(handle_leaderboard);

    let calculate_score = warp::path!("api" / "scores" / "calculate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handle_calculate_score);

    let submit_score = warp::path!("api" / "scores")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(score_repository_filter.clone())
        .and_then(handle_submit_score);

    let check_nickname = warp::path!("api" / "scores" / "check-nickname" / String)
        .and(warp::get())
        .and(score_repository_filter.clone())
        .and_then(handle_check_nickname);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    health
        .or(categories)
        .or(random_word)
        .or(list_words)
        .or(add_word)
        .or(update_word)
        .or(delete_word)
        .or(leaderboard)
        .or(calculate_score)
        .or(submit_score)
        .or(check_nickname)
        .with(cors)
        .with(warp::log("wordgame"))
}

async fn handle_categories(
    word_repository: Arc<WordRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match word_repository.categories().await {
        Ok(categories) => Ok(warp::reply::with_status(
            warp::reply::json(&categories),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to list categories: {}", err);
            Ok(internal_error("Failed to list categories"))
        }
    }
}

async fn handle_random_word(
    category: String,
    word_repository: Arc<WordRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match word_repository.random_word(&category).await {
        Ok(Some(entry)) => Ok(warp::reply::with_status(
            warp::reply::json(&entry),
            StatusCode::OK,
        )),
        Ok(None) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "No words available in this category"
            })),
            StatusCode::NOT_FOUND,
        )),
        Err(err) => {
            tracing::error!("Failed to pick a random word: {}", err);
            Ok(internal_error("Failed to pick a random word"))
        }
    }
}

async fn handle_list_words(
    word_repository: Arc<WordRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match word_repository.list().await {
        Ok(words) => Ok(warp::reply::with_status(
            warp::reply::json(&words),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to list words: {}", err);
            Ok(internal_error("Failed to list words"))
        }
    }
}

async fn handle_add_word(
    entry: WordEntry,
    word_repository: Arc<WordRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let entry = WordEntry::new(&entry.category, &entry.word, &entry.hint);

    if !WordValidator::is_valid_entry(&entry) {
        return Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "Word already exists or invalid format"
            })),
            StatusCode::CONFLICT,
        ));
    }

    match word_repository.add(&entry).await {
        Ok(true) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "message": "Word added successfully"
            })),
            StatusCode::OK,
        )),
        Ok(false) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "Word already exists or invalid format"
            })),
            StatusCode::CONFLICT,
        )),
        Err(err) => {
            tracing::error!("Failed to add word: {}", err);
            Ok(internal_error("Failed to add word"))
        }
    }
}

async fn handle_update_word(
    word: String,
    entry: WordEntry,
    word_repository: Arc<WordRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let entry = WordEntry::new(&entry.category, &entry.word, &entry.hint);

    if !WordValidator::is_valid_entry(&entry) {
        return Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "Failed to update word"
            })),
            StatusCode::BAD_REQUEST,
        ));
    }

    match word_repository.update(&word, &entry).await {
        Ok(true) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "message": "Word updated successfully"
            })),
            StatusCode::OK,
        )),
        Ok(false) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "Failed to update word"
            })),
            StatusCode::BAD_REQUEST,
        )),
        Err(err) => {
            tracing::error!("Failed to update word: {}", err);
            Ok(internal_error("Failed to update word"))
        }
    }
}

async fn handle_delete_word(
    word: String,
    word_repository: Arc<WordRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match word_repository.delete(&word).await {
        Ok(true) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "message": "Word deleted successfully"
            })),
            StatusCode::OK,
        )),
        Ok(false) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "Word not found"
            })),
            StatusCode::NOT_FOUND,
        )),
        Err(err) => {
            tracing::error!("Failed to delete word: {}", err);
            Ok(internal_error("Failed to delete word"))
        }
    }
}

async fn handle_leaderboard(
    score_repository: Arc<ScoreRepository>,
    limit: u64,
) -> Result<impl warp::Reply, warp::Rejection> {
    match score_repository.top_scores(limit).await {
        Ok(entries) => Ok(warp::reply::with_status(
            warp::reply::json(&entries),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to fetch leaderboard: {}", err);
            Ok(internal_error("Failed to fetch leaderboard"))
        }
    }
}

async fn handle_calculate_score(query: ScoreQuery) -> Result<impl warp::Reply, warp::Rejection> {
    let score = ScoreCalculator::calculate(query.elapsed_seconds, query.attempts, query.used_hint);

    Ok(warp::reply::with_status(
        warp::reply::json(&ScoreResponse { score }),
        StatusCode::OK,
    ))
}

async fn handle_submit_score(
    outcome: GameOutcome,
    score_repository: Arc<ScoreRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // The service is the scoring authority; clients submit the raw
    // outcome and the score is computed here.
    let score = ScoreCalculator::score_outcome(&outcome);

    match score_repository.add(&outcome, score).await {
        Ok(saved) => Ok(warp::reply::with_status(
            warp::reply::json(&saved),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to save score: {}", err);
            Ok(internal_error("Failed to save score"))
        }
    }
}

async fn handle_check_nickname(
    nickname: String,
    score_repository: Arc<ScoreRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match score_repository.is_nickname_unique(&nickname).await {
        Ok(unique) => Ok(warp::reply::with_status(
            warp::reply::json(&NicknameCheck { unique }),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to check nickname: {}", err);
            Ok(internal_error("Failed to check nickname"))
        }
    }
}

fn internal_error(message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "error": message })),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
