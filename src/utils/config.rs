use crate::utils::split_list;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub gnews_api_key: String,
    pub gnews_base_url: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(3001),
            allowed_origins: split_list(
                &std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| {
                    "http://localhost:8000,http://127.0.0.1:8000,http://127.0.0.1:5500".to_string()
                }),
                ',',
            ),
            gnews_api_key: std::env::var("GNEWS_API_KEY").expect("GNEWS_API_KEY not set"),
            gnews_base_url: std::env::var("GNEWS_BASE_URL")
                .unwrap_or_else(|_| "https://gnews.io/api/v4/top-headlines".to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY not set"),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
        }
    }
}
