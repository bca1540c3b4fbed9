use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::client::detail::{AskRequest, GenerateRequest};
use crate::client::feed::PageRequest;
use crate::models::article::{HeadlinesPage, ScrapeResult};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with a non-success status and an
    /// `{ error, details? }` body.
    #[error("proxy returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    details: Option<String>,
}

impl ErrorBody {
    fn message(self) -> String {
        match self.details {
            Some(details) if !details.is_empty() => format!("{} ({details})", self.error),
            _ => self.error,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedBody {
    #[serde(rename = "generatedContent", default)]
    generated_content: String,
}

#[derive(Debug, Deserialize)]
struct AnswerBody {
    #[serde(default)]
    answer: String,
}

/// HTTP client for the proxy endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn fetch_headlines(
        &self,
        request: &PageRequest,
    ) -> Result<HeadlinesPage, ClientError> {
        let res = self
            .http
            .get(format!("{}/headlines", self.base_url))
            .query(&[
                ("topic", request.topic.as_str()),
                ("page", &request.page.to_string()),
                ("max", &request.max.to_string()),
            ])
            .send()
            .await?;
        decode(res).await
    }

    pub async fn generate_article(
        &self,
        request: &GenerateRequest,
    ) -> Result<String, ClientError> {
        let res = self
            .http
            .get(format!("{}/generate-article", self.base_url))
            .query(&[
                ("title", request.title.as_str()),
                ("description", request.description.as_deref().unwrap_or("")),
                ("sourceName", request.source_name.as_deref().unwrap_or("")),
            ])
            .send()
            .await?;
        let body: GeneratedBody = decode(res).await?;
        Ok(body.generated_content)
    }

    pub async fn ask(&self, request: &AskRequest) -> Result<String, ClientError> {
        let res = self
            .http
            .get(format!("{}/ask", self.base_url))
            .query(&[
                ("question", request.question.as_str()),
                ("context", request.context.as_str()),
            ])
            .send()
            .await?;
        let body: AnswerBody = decode(res).await?;
        Ok(body.answer)
    }

    /// Fallback content path; not part of the default detail flow.
    pub async fn scrape_article(&self, url: &str) -> Result<ScrapeResult, ClientError> {
        let res = self
            .http
            .get(format!("{}/scrape-article", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ClientError> {
    let status = res.status();
    if !status.is_success() {
        let message = res
            .json::<ErrorBody>()
            .await
            .map(ErrorBody::message)
            .unwrap_or_else(|_| status.to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(res.json::<T>().await?)
}
