use crate::models::article::{Headline, HeadlinesPage};

pub const DEFAULT_TOPIC: &str = "breaking-news";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A headlines request the UI should fire against the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub topic: String,
    pub page: u32,
    pub max: u32,
}

/// View model for one feed card. Construction fails (returns `None`) when
/// the headline is missing a title, canonical URL, or image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub title: String,
    pub source_name: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

impl NewsCard {
    pub fn from_headline(headline: &Headline) -> Option<Self> {
        let image = headline.image.as_deref().unwrap_or("");
        if headline.title.is_empty() || headline.url.is_empty() || image.is_empty() {
            return None;
        }
        Some(Self {
            title: headline.title.clone(),
            source_name: if headline.source.name.is_empty() {
                "Unknown Source".to_string()
            } else {
                headline.source.name.clone()
            },
            description: headline.description.clone().unwrap_or_default(),
            image: image.to_string(),
            url: headline.url.clone(),
        })
    }
}

/// Pagination session for the infinite-scroll feed.
///
/// Two states, Idle and Loading. A transition method either returns the
/// request to fire (`Some`) or ignores the event (`None`); the response is
/// handed back through [`complete_load`](Self::complete_load) or
/// [`fail_load`](Self::fail_load). The Loading flag is the only guard
/// against overlapping feed requests.
#[derive(Debug)]
pub struct FeedSession {
    topic: String,
    page: u32,
    page_size: u32,
    total_results: u32,
    loading: bool,
    appending: bool,
    cards: Vec<NewsCard>,
}

impl FeedSession {
    pub fn new(topic: impl Into<String>, page_size: u32) -> Self {
        Self {
            topic: topic.into(),
            page: 1,
            page_size,
            total_results: 0,
            loading: false,
            appending: false,
            cards: Vec::new(),
        }
    }

    /// Initial load: clears the rendered cards and resets the cursor to
    /// page 1 before the request fires. Ignored while a load is in flight.
    pub fn start_load(&mut self) -> Option<PageRequest> {
        if self.loading {
            return None;
        }
        self.page = 1;
        self.cards.clear();
        self.appending = false;
        self.loading = true;
        Some(self.request())
    }

    /// Load-more trigger. Fires only when no load is in flight and the
    /// cursor invariant `page * page_size < total_results` still holds.
    pub fn scrolled_to_bottom(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.page += 1;
        self.appending = true;
        self.loading = true;
        Some(self.request())
    }

    pub fn complete_load(&mut self, page: HeadlinesPage) {
        self.loading = false;
        self.total_results = page.total_articles;
        let fresh = page.articles.iter().filter_map(NewsCard::from_headline);
        if self.appending {
            self.cards.extend(fresh);
        } else {
            self.cards = fresh.collect();
        }
    }

    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    pub fn has_more(&self) -> bool {
        self.page * self.page_size < self.total_results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cards(&self) -> &[NewsCard] {
        &self.cards
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    fn request(&self) -> PageRequest {
        PageRequest {
            topic: self.topic.clone(),
            page: self.page,
            max: self.page_size,
        }
    }
}

impl Default for FeedSession {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC, DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::article::Source;

    fn headline(title: &str, url: &str, image: Option<&str>) -> Headline {
        Headline {
            title: title.to_string(),
            description: Some(format!("{title} description")),
            content: None,
            url: url.to_string(),
            image: image.map(str::to_string),
            published_at: None,
            source: Source {
                name: "Example Wire".to_string(),
                url: None,
            },
        }
    }

    fn page_of(count: usize, total: u32) -> HeadlinesPage {
        HeadlinesPage {
            articles: (0..count)
                .map(|i| {
                    headline(
                        &format!("Story {i}"),
                        &format!("https://example.com/{i}"),
                        Some("https://example.com/img.jpg"),
                    )
                })
                .collect(),
            total_articles: total,
        }
    }

    #[test]
    fn initial_load_resets_cursor_and_clears_cards() {
        let mut session = FeedSession::default();
        let request = session.start_load().unwrap();
        assert_eq!(request.topic, DEFAULT_TOPIC);
        assert_eq!(request.page, 1);
        assert_eq!(request.max, DEFAULT_PAGE_SIZE);
        session.complete_load(page_of(10, 57));
        assert_eq!(session.cards().len(), 10);

        // a fresh initial load starts over from page 1
        session.scrolled_to_bottom().unwrap();
        session.complete_load(page_of(10, 57));
        assert_eq!(session.cards().len(), 20);
        let request = session.start_load().unwrap();
        assert_eq!(request.page, 1);
        assert!(session.cards().is_empty());
    }

    #[test]
    fn concurrent_load_requests_are_ignored() {
        let mut session = FeedSession::default();
        assert!(session.start_load().is_some());
        assert!(session.is_loading());
        assert!(session.start_load().is_none());
        assert!(session.scrolled_to_bottom().is_none());
    }

    #[test]
    fn load_more_appends_instead_of_replacing() {
        let mut session = FeedSession::default();
        session.start_load().unwrap();
        session.complete_load(page_of(10, 57));

        let request = session.scrolled_to_bottom().unwrap();
        assert_eq!(request.page, 2);
        session.complete_load(page_of(10, 57));
        assert_eq!(session.cards().len(), 20);
    }

    #[test]
    fn no_load_more_once_results_are_exhausted() {
        // 57 results at 10 per page: pages 1-5 full, page 6 returns 7,
        // and 6 * 10 >= 57 stops the feed.
        let mut session = FeedSession::default();
        session.start_load().unwrap();
        session.complete_load(page_of(10, 57));

        for expected_page in 2..=5 {
            let request = session.scrolled_to_bottom().unwrap();
            assert_eq!(request.page, expected_page);
            session.complete_load(page_of(10, 57));
        }
        assert_eq!(session.cards().len(), 50);

        let request = session.scrolled_to_bottom().unwrap();
        assert_eq!(request.page, 6);
        session.complete_load(page_of(7, 57));
        assert_eq!(session.cards().len(), 57);

        assert!(!session.has_more());
        assert!(session.scrolled_to_bottom().is_none());
    }

    #[test]
    fn no_load_more_before_anything_loaded() {
        let mut session = FeedSession::default();
        assert!(session.scrolled_to_bottom().is_none());
    }

    #[test]
    fn failed_load_returns_to_idle_and_keeps_cards() {
        let mut session = FeedSession::default();
        session.start_load().unwrap();
        session.complete_load(page_of(10, 57));

        session.scrolled_to_bottom().unwrap();
        session.fail_load();
        assert!(!session.is_loading());
        assert_eq!(session.cards().len(), 10);
        // the cursor stays advanced; the failed page is not re-fetched
        let request = session.scrolled_to_bottom().unwrap();
        assert_eq!(request.page, 3);
    }

    #[test]
    fn cards_missing_required_fields_are_skipped() {
        let page = HeadlinesPage {
            articles: vec![
                headline("Complete", "https://example.com/1", Some("https://example.com/1.jpg")),
                headline("", "https://example.com/2", Some("https://example.com/2.jpg")),
                headline("No url", "", Some("https://example.com/3.jpg")),
                headline("No image", "https://example.com/4", None),
                headline("Empty image", "https://example.com/5", Some("")),
            ],
            total_articles: 5,
        };

        let mut session = FeedSession::default();
        session.start_load().unwrap();
        session.complete_load(page);

        assert_eq!(session.cards().len(), 1);
        assert_eq!(session.cards()[0].title, "Complete");
    }

    #[test]
    fn card_falls_back_to_unknown_source() {
        let mut item = headline("Story", "https://example.com/s", Some("https://example.com/i.jpg"));
        item.source = Source::default();
        let card = NewsCard::from_headline(&item).unwrap();
        assert_eq!(card.source_name, "Unknown Source");
    }
}
