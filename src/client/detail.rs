use thiserror::Error;

use crate::models::article::Headline;
use crate::utils::prompts::context_prefix;

/// Generation request for the detail view, stamped with the view epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub epoch: u64,
    pub title: String,
    pub description: Option<String>,
    pub source_name: Option<String>,
}

/// Follow-up question request; `context` is already the bounded prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub epoch: u64,
    pub question: String,
    pub context: String,
}

/// What the detail body region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyState {
    Generating,
    Generated(String),
    /// Generation failed; `fallback` carries the headline's own body or
    /// description text when any exists, so the region is never left empty.
    Failed {
        message: String,
        fallback: Option<String>,
    },
}

/// One follow-up question and, once resolved, its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub outcome: Option<Result<String, String>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question must not be empty")]
    Empty,
    #[error("a question is already in flight")]
    Busy,
}

/// Article detail view: immediate headline fields, an AI-generated body,
/// and a follow-up Q&A loop grounded on the generated text.
///
/// Every open bumps the view epoch and requests carry it; a response whose
/// epoch no longer matches is stale and dropped, so rapid re-activation
/// cannot interleave bodies from different articles.
#[derive(Debug, Default)]
pub struct DetailView {
    epoch: u64,
    headline: Option<Headline>,
    body: Option<BodyState>,
    context: Option<String>,
    exchanges: Vec<Exchange>,
    asking: bool,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a card: the headline's own fields display immediately while
    /// the returned generation request is in flight.
    pub fn open(&mut self, headline: Headline) -> GenerateRequest {
        self.epoch += 1;
        self.context = None;
        self.exchanges.clear();
        self.asking = false;
        self.body = Some(BodyState::Generating);

        let request = GenerateRequest {
            epoch: self.epoch,
            title: headline.title.clone(),
            description: headline.description.clone(),
            source_name: (!headline.source.name.is_empty())
                .then(|| headline.source.name.clone()),
        };
        self.headline = Some(headline);
        request
    }

    pub fn generation_succeeded(&mut self, epoch: u64, text: String) {
        if epoch != self.epoch || self.headline.is_none() {
            return;
        }
        self.context = Some(text.clone());
        self.body = Some(BodyState::Generated(text));
    }

    pub fn generation_failed(&mut self, epoch: u64, message: String) {
        if epoch != self.epoch || self.headline.is_none() {
            return;
        }
        let fallback = self.headline.as_ref().and_then(|h| {
            h.content
                .clone()
                .filter(|c| !c.is_empty())
                .or_else(|| h.description.clone().filter(|d| !d.is_empty()))
        });
        self.body = Some(BodyState::Failed { message, fallback });
    }

    /// Validate and register a follow-up question. The UI clears its input
    /// field and re-enables controls when the exchange resolves.
    pub fn submit_question(&mut self, question: &str) -> Result<AskRequest, QuestionError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(QuestionError::Empty);
        }
        if self.asking {
            return Err(QuestionError::Busy);
        }

        self.asking = true;
        self.exchanges.push(Exchange {
            question: question.to_string(),
            outcome: None,
        });
        Ok(AskRequest {
            epoch: self.epoch,
            question: question.to_string(),
            context: context_prefix(self.context.as_deref().unwrap_or("")).to_string(),
        })
    }

    /// Resolve the pending exchange. Controls re-enable on success and
    /// failure alike; stale epochs are dropped.
    pub fn answer_received(&mut self, epoch: u64, outcome: Result<String, String>) {
        if epoch != self.epoch {
            return;
        }
        self.asking = false;
        if let Some(pending) = self.exchanges.iter_mut().rev().find(|e| e.outcome.is_none()) {
            pending.outcome = Some(outcome);
        }
    }

    /// Close the view. The generated context does not outlive the view.
    pub fn close(&mut self) {
        self.headline = None;
        self.body = None;
        self.context = None;
        self.exchanges.clear();
        self.asking = false;
    }

    pub fn headline(&self) -> Option<&Headline> {
        self.headline.as_ref()
    }

    pub fn body(&self) -> Option<&BodyState> {
        self.body.as_ref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn is_asking(&self) -> bool {
        self.asking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::article::Source;
    use crate::utils::prompts::CONTEXT_PREFIX_CHARS;

    fn headline() -> Headline {
        Headline {
            title: "Storm hits coast".to_string(),
            description: Some("A powerful storm made landfall.".to_string()),
            content: None,
            url: "https://example.com/storm".to_string(),
            image: Some("https://example.com/storm.jpg".to_string()),
            published_at: None,
            source: Source {
                name: "Example Wire".to_string(),
                url: None,
            },
        }
    }

    #[test]
    fn open_populates_request_from_headline() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        assert_eq!(request.title, "Storm hits coast");
        assert_eq!(
            request.description.as_deref(),
            Some("A powerful storm made landfall.")
        );
        assert_eq!(request.source_name.as_deref(), Some("Example Wire"));
        assert_eq!(view.body(), Some(&BodyState::Generating));
        assert_eq!(view.headline().unwrap().title, "Storm hits coast");
    }

    #[test]
    fn generation_success_stores_context_verbatim() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        view.generation_succeeded(request.epoch, "Generated body text.".to_string());

        assert_eq!(view.context(), Some("Generated body text."));
        assert_eq!(
            view.body(),
            Some(&BodyState::Generated("Generated body text.".to_string()))
        );
    }

    #[test]
    fn follow_up_uses_bounded_context_prefix() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        let long_body = "z".repeat(CONTEXT_PREFIX_CHARS + 250);
        view.generation_succeeded(request.epoch, long_body.clone());
        // stored verbatim, truncated only at use
        assert_eq!(view.context(), Some(long_body.as_str()));

        let ask = view.submit_question("What happened?").unwrap();
        assert_eq!(ask.context.chars().count(), CONTEXT_PREFIX_CHARS);
        assert_eq!(ask.question, "What happened?");
    }

    #[test]
    fn generation_failure_falls_back_to_description() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        view.generation_failed(request.epoch, "Failed to generate article content with AI.".to_string());

        match view.body() {
            Some(BodyState::Failed { message, fallback }) => {
                assert_eq!(message, "Failed to generate article content with AI.");
                assert_eq!(fallback.as_deref(), Some("A powerful storm made landfall."));
            }
            other => panic!("unexpected body state: {other:?}"),
        }
        assert_eq!(view.context(), None);
    }

    #[test]
    fn generation_failure_prefers_content_over_description() {
        let mut item = headline();
        item.content = Some("Raw body snippet.".to_string());
        let mut view = DetailView::new();
        let request = view.open(item);
        view.generation_failed(request.epoch, "boom".to_string());

        match view.body() {
            Some(BodyState::Failed { fallback, .. }) => {
                assert_eq!(fallback.as_deref(), Some("Raw body snippet."));
            }
            other => panic!("unexpected body state: {other:?}"),
        }
    }

    #[test]
    fn generation_failure_without_fallback_text() {
        let mut item = headline();
        item.description = None;
        let mut view = DetailView::new();
        let request = view.open(item);
        view.generation_failed(request.epoch, "boom".to_string());

        match view.body() {
            Some(BodyState::Failed { fallback, .. }) => assert_eq!(*fallback, None),
            other => panic!("unexpected body state: {other:?}"),
        }
    }

    #[test]
    fn stale_generation_responses_are_dropped() {
        let mut view = DetailView::new();
        let first = view.open(headline());

        let mut second_headline = headline();
        second_headline.title = "Second story".to_string();
        let second = view.open(second_headline);

        // the superseded request resolves late; it must not win
        view.generation_succeeded(first.epoch, "First body.".to_string());
        assert_eq!(view.body(), Some(&BodyState::Generating));

        view.generation_succeeded(second.epoch, "Second body.".to_string());
        assert_eq!(
            view.body(),
            Some(&BodyState::Generated("Second body.".to_string()))
        );
        assert_eq!(view.context(), Some("Second body."));
    }

    #[test]
    fn empty_question_is_rejected_without_a_request() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        view.generation_succeeded(request.epoch, "Body.".to_string());

        assert_eq!(view.submit_question(""), Err(QuestionError::Empty));
        assert_eq!(view.submit_question("   \t "), Err(QuestionError::Empty));
        assert!(view.exchanges().is_empty());
        assert!(!view.is_asking());
    }

    #[test]
    fn controls_disabled_while_question_in_flight() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        view.generation_succeeded(request.epoch, "Body.".to_string());

        let ask = view.submit_question("Why?").unwrap();
        assert!(view.is_asking());
        assert_eq!(view.submit_question("Again?"), Err(QuestionError::Busy));

        view.answer_received(ask.epoch, Ok("Because.".to_string()));
        assert!(!view.is_asking());
        assert_eq!(
            view.exchanges()[0].outcome,
            Some(Ok("Because.".to_string()))
        );

        // re-enabled after failure too
        let ask = view.submit_question("And then?").unwrap();
        view.answer_received(ask.epoch, Err("Failed to get AI answer.".to_string()));
        assert!(!view.is_asking());
        assert_eq!(view.exchanges().len(), 2);
    }

    #[test]
    fn question_without_generated_context_sends_empty_context() {
        let mut view = DetailView::new();
        view.open(headline());
        let ask = view.submit_question("What do we know?").unwrap();
        assert_eq!(ask.context, "");
    }

    #[test]
    fn close_clears_context_and_exchanges() {
        let mut view = DetailView::new();
        let request = view.open(headline());
        view.generation_succeeded(request.epoch, "Body.".to_string());
        view.submit_question("Why?").unwrap();

        view.close();
        assert_eq!(view.context(), None);
        assert_eq!(view.body(), None);
        assert!(view.headline().is_none());
        assert!(view.exchanges().is_empty());
        assert!(!view.is_asking());
    }
}
