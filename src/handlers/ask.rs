use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::models::error::Error;
use crate::utils::gemini;
use crate::utils::prompts::follow_up_prompt;
use crate::utils::state::AppState;

#[derive(Deserialize)]
pub struct AskQuery {
    question: Option<String>,
    context: Option<String>,
}

/// Answer a follow-up question. The supplied context is background for the
/// model, not a hard constraint, and only its bounded prefix is embedded.
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AskQuery>,
) -> Result<impl IntoResponse, Error> {
    let question = params.question.as_deref().unwrap_or("").trim();
    if question.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "Question is required."));
    }

    info!(question, "answering follow-up question");

    let prompt = follow_up_prompt(question, params.context.as_deref().unwrap_or(""));

    match gemini::generate_content(&state, &prompt).await {
        Ok(text) => Ok((StatusCode::OK, Json(json!({ "answer": text })))),
        Err(details) => Err(Error::with_details(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to get AI answer.",
            &details,
        )),
    }
}
