//! Best-effort article extraction from scraped HTML.
//!
//! Heuristic, not a guaranteed extraction: the content selector chain is
//! tried in order and the first non-empty match wins; everything else
//! degrades to fallbacks rather than failing.

use scraper::{Html, Selector};
use url::Url;

use crate::models::article::ScrapeResult;

/// Ordered content selectors. The order is the contract.
const CONTENT_SELECTORS: [&str; 8] = [
    "article",
    "div.entry-content",
    "div.article-body",
    "div.post-content",
    r#"div[itemprop="articleBody"]"#,
    "div.story-content",
    "div.main-content",
    "div.content-main",
];

/// Page-text prefix returned when no content selector matches.
pub const FALLBACK_PREFIX_CHARS: usize = 1000;

const FALLBACK_NOTICE: &str = "... (Could not find specific article content)";

pub fn extract_article(html: &str, page_url: &str) -> ScrapeResult {
    let document = Html::parse_document(html);
    ScrapeResult {
        full_content: main_content(&document),
        full_title: page_title(&document),
        full_image_url: image_url(&document, page_url),
    }
}

fn main_content(document: &Html) -> String {
    for selector in CONTENT_SELECTORS {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = document.select(&sel).next() {
            let text = element.text().collect::<Vec<_>>().join(" ");
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return collapse_whitespace(trimmed);
            }
        }
    }

    // No selector matched: bounded prefix of the whole page text, flagged.
    let body_sel = Selector::parse("body").unwrap();
    let body_text = document
        .select(&body_sel)
        .next()
        .map(|body| body.text().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let prefix: String = body_text.trim().chars().take(FALLBACK_PREFIX_CHARS).collect();
    collapse_whitespace(&format!("{prefix}{FALLBACK_NOTICE}"))
}

/// Collapse every run of two or more whitespace characters into a single
/// space; lone whitespace characters are kept as-is.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0usize;
    let mut last_ws = ' ';
    for c in s.chars() {
        if c.is_whitespace() {
            run += 1;
            last_ws = c;
        } else {
            match run {
                0 => {}
                1 => out.push(last_ws),
                _ => out.push(' '),
            }
            run = 0;
            out.push(c);
        }
    }
    match run {
        0 => {}
        1 => out.push(last_ws),
        _ => out.push(' '),
    }
    out
}

fn page_title(document: &Html) -> Option<String> {
    if let Some(title) = meta_content(document, r#"meta[property="og:title"]"#) {
        return Some(title);
    }
    if let Some(h1) = first_text(document, "h1") {
        return Some(h1);
    }
    first_text(document, "title")
}

fn image_url(document: &Html, page_url: &str) -> Option<String> {
    let raw = meta_content(document, r#"meta[property="og:image"]"#)
        .or_else(|| meta_content(document, r#"meta[name="twitter:image"]"#))
        .or_else(|| attr_value(document, r#"img[itemprop="image"]"#, "src"))?;

    if raw.starts_with("http") {
        return Some(raw);
    }
    let base = Url::parse(page_url).ok()?;
    base.join(&raw).ok().map(|resolved| resolved.to_string())
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    attr_value(document, selector, "content")
}

fn attr_value(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn first_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .map(|element| element.text().collect::<Vec<_>>().join(" "))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
