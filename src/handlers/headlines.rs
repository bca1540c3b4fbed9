use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::error::Error;
use crate::utils::state::AppState;

#[derive(Deserialize)]
pub struct HeadlinesQuery {
    topic: Option<String>,
    page: Option<u32>,
    max: Option<u32>,
}

/// Proxy to the headlines provider. The provider's JSON body is relayed
/// unchanged on success; any failure collapses to a generic 500.
pub async fn get_headlines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeadlinesQuery>,
) -> Result<impl IntoResponse, Error> {
    let topic = params.topic.unwrap_or_else(|| "breaking-news".to_string());
    let page = params.page.unwrap_or(1);
    let max = params.max.unwrap_or(10);

    info!(%topic, page, max, "fetching headlines");

    let upstream_error = |e: reqwest::Error| {
        warn!(error = %e, "headlines fetch failed");
        Error::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch news from headlines provider",
        )
    };

    let res = state
        .http_client
        .get(&state.config.gnews_base_url)
        .query(&[
            ("topic", topic.as_str()),
            ("lang", "en"),
            ("max", &max.to_string()),
            ("page", &page.to_string()),
            ("token", &state.config.gnews_api_key),
        ])
        .send()
        .await
        .map_err(upstream_error)?;

    let data: Value = res.json().await.map_err(upstream_error)?;

    Ok((StatusCode::OK, Json(data)))
}
