//! Lowercase tokenization and keyword frequency ranking.

use std::collections::HashMap;

/// Upper bound on the number of keywords returned by [`top_keywords`].
pub const MAX_KEYWORDS: usize = 15;

/// Words too common to say anything about a product.
pub(crate) const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "for", "in", "on", "is", "are", "it", "this",
    "that", "with", "at", "be", "as", "by", "from", "about", "was", "were", "have", "had", "has",
    "but", "if", "they", "you", "we", "i", "so",
];

/// Split text into lowercase word tokens, dropping stopwords.
///
/// Every character that is neither alphanumeric nor whitespace becomes a
/// space, so `"don't"` yields `"don"` and `"t"`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Return up to [`MAX_KEYWORDS`] tokens that occur more than once.
///
/// Ordered by descending count; ties keep first-seen order. Returns an empty
/// list when no token repeats.
#[must_use]
pub fn top_keywords(text: &str) -> Vec<String> {
    // (first-seen index, count) per token
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, token) in tokenize(text).into_iter().enumerate() {
        counts.entry(token).or_insert((idx, 0)).1 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|(token, (first_seen, count))| (token, first_seen, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _, _)| token)
        .collect()
}
