use tracing::{debug, warn};

use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse, ProviderError};
use crate::utils::state::AppState;

/// Send a single-turn prompt to the generative-text provider.
///
/// No retries: the proxy surfaces the first failure to the caller. The
/// returned `Err` carries the provider's error detail when one was given.
pub async fn generate_content(state: &AppState, prompt: &str) -> Result<String, String> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        state.config.gemini_base_url, state.config.gemini_model, state.config.gemini_api_key
    );
    let request = GenerateContentRequest::with_prompt(prompt);

    let res = state
        .http_client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = res.status();
    let body = res.text().await.map_err(|e| e.to_string())?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ProviderError>(&body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("provider returned status {status}"));
        warn!(%status, detail = %detail, "generative provider returned an error");
        return Err(detail);
    }

    let response: GenerateContentResponse =
        serde_json::from_str(&body).map_err(|e| e.to_string())?;
    debug!(candidates = response.candidates.len(), "provider response parsed");

    response
        .text()
        .ok_or_else(|| "provider returned no candidates".to_string())
}
