//! Prompt templates for the generative-text provider.
//!
//! Both templates are fixed: handlers fill in the request fields and send
//! the result as a single-turn prompt.

/// Longest prefix of the stored article text reused as Q&A background.
pub const CONTEXT_PREFIX_CHARS: usize = 500;

/// Prefix of `context` bounded to [`CONTEXT_PREFIX_CHARS`] characters,
/// cut on a char boundary.
pub fn context_prefix(context: &str) -> &str {
    match context.char_indices().nth(CONTEXT_PREFIX_CHARS) {
        Some((idx, _)) => &context[..idx],
        None => context,
    }
}

pub fn article_prompt(title: &str, description: Option<&str>, source_name: Option<&str>) -> String {
    format!(
        "Based on the following news headline and brief description, generate a concise yet \
comprehensive news article (around 200-300 words) that provides context, key details, and \
potential implications. Focus on factual reporting. Do not include a conversational intro \
like \"Here's an article...\" or \"This article details...\". Just provide the news content.\n\
\n\
Headline: \"{}\"\n\
Description: \"{}\"\n\
Source (for context, if available): {}\n\
\n\
Generated Article:\n",
        title,
        description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No specific description provided, infer from headline."),
        source_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Unknown"),
    )
}

pub fn follow_up_prompt(question: &str, context: &str) -> String {
    format!(
        "Answer the following question. Use your general knowledge to provide a comprehensive \
and helpful response. If the question is ambiguous, provide a balanced answer.\n\
\n\
Question: \"{}\"\n\
\n\
(Context related to the current news article, if helpful: {}...)\n\
\n\
Answer:\n",
        question,
        context_prefix(context),
    )
}
