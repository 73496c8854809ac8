use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        CreateSessionRequest, Explanation, Question, QuizAnswers, QuizAnswersInput,
        Recommendation, Title, TitleId, WatchSession,
    },
    services::{explanation, quiz, recommendations, session},
};

use super::AppState;

fn find_title<'a>(state: &'a AppState, id: &TitleId) -> AppResult<&'a Title> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("title '{}'", id)))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Quiz questions with sample titles per option
pub async fn get_quiz(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(quiz::questions(&state.catalog))
}

/// Ranks the catalog for a completed quiz
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(input): Json<QuizAnswersInput>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let answers = QuizAnswers::try_from(input)?;

    tracing::info!(
        request_id = %request_id,
        mood = answers.mood(),
        language = answers.language(),
        "Processing recommendation request"
    );

    let ranked = recommendations::recommend(&answers, &state.catalog);

    tracing::info!(
        request_id = %request_id,
        returned = ranked.len(),
        "Recommendations ready"
    );

    Ok(Json(ranked))
}

/// "Surprise me": the curated trending list
pub async fn get_trending(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    Json(recommendations::trending(&state.catalog))
}

/// Get all titles
pub async fn get_titles(State(state): State<AppState>) -> Json<Vec<Title>> {
    Json(state.catalog.titles().to_vec())
}

/// Get a single title
pub async fn get_title(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Title>> {
    let title = find_title(&state, &TitleId::new(id))?;
    Ok(Json(title.clone()))
}

/// Explains how a title scores for a set of answers
pub async fn explain_title(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<QuizAnswersInput>,
) -> AppResult<Json<Explanation>> {
    let answers = QuizAnswers::try_from(input)?;
    let title = find_title(&state, &TitleId::new(id))?;

    Ok(Json(explanation::explain(
        title,
        &answers,
        &state.catalog,
        &recommendations::ScoringWeights::default(),
    )))
}

/// Opens a mock watch-together session for a title
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> AppResult<(StatusCode, Json<WatchSession>)> {
    let title = find_title(&state, &request.title_id)?;
    let watch_session = session::create_session(title, &state.share_base_url);
    Ok((StatusCode::CREATED, Json(watch_session)))
}
