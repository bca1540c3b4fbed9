use serde::{Deserialize, Serialize};

/// A single news item as returned by the headlines provider.
///
/// Fields the provider may omit or null out are defaulted so a sparse
/// headline still deserializes; the card layer decides what is usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub source: Source,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One page of headlines: `{ articles: [...], totalArticles }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlinesPage {
    #[serde(default)]
    pub articles: Vec<Headline>,
    #[serde(rename = "totalArticles", default)]
    pub total_articles: u32,
}

/// Best-effort extraction from a scraped article page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    #[serde(rename = "fullContent")]
    pub full_content: String,
    #[serde(rename = "fullTitle")]
    pub full_title: Option<String>,
    #[serde(rename = "fullImageUrl")]
    pub full_image_url: Option<String>,
}
