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
use crate::utils::prompts::article_prompt;
use crate::utils::state::AppState;

#[derive(Deserialize)]
pub struct GenerateQuery {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "sourceName")]
    source_name: Option<String>,
}

/// Generate an article body for a headline via the generative provider.
pub async fn generate_article(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenerateQuery>,
) -> Result<impl IntoResponse, Error> {
    let title = params.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        return Err(Error::new(
            StatusCode::BAD_REQUEST,
            "Title is required to generate article content.",
        ));
    }

    info!(title, "generating article content");

    let prompt = article_prompt(
        title,
        params.description.as_deref(),
        params.source_name.as_deref(),
    );

    match gemini::generate_content(&state, &prompt).await {
        Ok(text) => Ok((StatusCode::OK, Json(json!({ "generatedContent": text })))),
        Err(details) => Err(Error::with_details(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate article content with AI.",
            &details,
        )),
    }
}
