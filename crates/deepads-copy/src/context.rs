use deepads_core::{AdConfig, Platform, ResearchInsights};

use crate::text::{capitalize, first_words};

const HEADLINE_PRODUCT_WORDS: usize = 4;
const FALLBACK_PRODUCT: &str = "Your Product";
const FALLBACK_AUDIENCE: &str = "your audience";
const FALLBACK_KEYWORD: &str = "innovation";

/// Values every framework template draws from, resolved once per request.
pub(crate) struct CopyContext<'a> {
    /// First words of the description, or a generic product name.
    pub product: String,
    /// Whole description, trimmed and sentence-cased.
    pub base: String,
    pub audience: &'a str,
    pub keyword: &'a str,
    pub platform: &'a Platform,
    /// At most two.
    pub pains: &'a [String],
    /// At most two.
    pub desires: &'a [String],
    /// At most one.
    pub objections: &'a [String],
}

fn head(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}

impl<'a> CopyContext<'a> {
    pub(crate) fn new(config: &'a AdConfig, insights: &'a ResearchInsights) -> Self {
        let description = config.product_description.trim();
        let product = first_words(description, HEADLINE_PRODUCT_WORDS);

        Self {
            product: if product.is_empty() {
                FALLBACK_PRODUCT.to_string()
            } else {
                product
            },
            base: capitalize(description),
            audience: config.audience().unwrap_or(FALLBACK_AUDIENCE),
            keyword: insights.top_keyword().unwrap_or(FALLBACK_KEYWORD),
            platform: &config.platform,
            pains: head(&insights.pains, 2),
            desires: head(&insights.desires, 2),
            objections: head(&insights.objections, 1),
        }
    }
}
