use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::error::Error;
use crate::utils::extract::extract_article;
use crate::utils::state::AppState;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
pub struct ScrapeQuery {
    url: Option<String>,
}

/// Fetch an article page and extract its content, title, and image.
///
/// Fallback content source only; the default client flow never calls this.
pub async fn scrape_article(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScrapeQuery>,
) -> Result<impl IntoResponse, Error> {
    let article_url = params.url.as_deref().unwrap_or("").trim().to_string();
    if article_url.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "Article URL is required"));
    }

    info!(url = %article_url, "scraping article");

    let fetch_error = |e: reqwest::Error| {
        warn!(error = %e, url = %article_url, "article fetch failed");
        Error::with_details(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to scrape article content",
            &e.to_string(),
        )
    };

    let res = state
        .http_client
        .get(&article_url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .map_err(&fetch_error)?;

    let status = res.status();
    if !status.is_success() {
        warn!(%status, url = %article_url, "article source returned non-success status");
        return Err(Error::new(
            status,
            &format!(
                "Failed to fetch article from source: {}",
                status.canonical_reason().unwrap_or("unknown status")
            ),
        ));
    }

    let html = res.text().await.map_err(&fetch_error)?;
    let result = extract_article(&html, &article_url);

    Ok((StatusCode::OK, Json(result)))
}
