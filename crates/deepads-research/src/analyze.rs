//! Research entry point combining keyword ranking and line classification.

use deepads_core::ResearchInsights;

use crate::classifier::classify_lines;
use crate::tokenize::top_keywords;

/// How much of the product description is quoted in fallback sentences.
const FALLBACK_EXCERPT_CHARS: usize = 80;

/// Mine keywords, pains, desires, and objections from free text.
///
/// Keywords come from the product description and VOC text together; the
/// pain/desire/objection buckets come from the VOC lines alone. When the VOC
/// text yields no pains or no desires and a product description is given, a
/// generic sentence about the product fills the gap. Objections never get a
/// fallback and may be empty.
#[must_use]
pub fn analyze_market_text(product_description: &str, voc_text: &str) -> ResearchInsights {
    let combined = format!("{product_description}\n{voc_text}");
    let top_keywords = top_keywords(&combined);
    let mut classified = classify_lines(voc_text);

    let product = product_description.trim();
    if !product.is_empty() {
        let excerpt: String = product.chars().take(FALLBACK_EXCERPT_CHARS).collect();
        if classified.pains.is_empty() {
            classified.pains.push(format!(
                "People struggle to get consistent results with current solutions for {excerpt}..."
            ));
        }
        if classified.desires.is_empty() {
            classified.desires.push(format!(
                "They want a simpler, faster way to benefit from {excerpt}."
            ));
        }
    }

    tracing::debug!(
        keywords = top_keywords.len(),
        pains = classified.pains.len(),
        desires = classified.desires.len(),
        objections = classified.objections.len(),
        "market text analyzed"
    );

    ResearchInsights {
        top_keywords,
        pains: classified.pains,
        desires: classified.desires,
        objections: classified.objections,
        raw_notes: voc_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTTLE: &str = "A reusable water bottle that keeps drinks cold for 24 hours";

    #[test]
    fn empty_voc_triggers_both_fallbacks() {
        let insights = analyze_market_text(BOTTLE, "");
        assert_eq!(insights.pains.len(), 1);
        assert_eq!(insights.desires.len(), 1);
        assert!(insights.objections.is_empty());
        assert!(insights.pains[0].contains(BOTTLE));
        assert!(insights.pains[0].ends_with("..."));
        assert_eq!(
            insights.desires[0],
            format!("They want a simpler, faster way to benefit from {BOTTLE}.")
        );
    }

    #[test]
    fn empty_voc_yields_no_keywords_for_unique_words() {
        let insights = analyze_market_text(BOTTLE, "");
        assert!(insights.top_keywords.is_empty());
    }

    #[test]
    fn blank_description_disables_fallbacks() {
        let insights = analyze_market_text("   ", "");
        assert!(insights.pains.is_empty());
        assert!(insights.desires.is_empty());
    }

    #[test]
    fn fallback_excerpt_is_truncated() {
        let long = "x".repeat(200);
        let insights = analyze_market_text(&long, "");
        let expected = format!(
            "They want a simpler, faster way to benefit from {}.",
            "x".repeat(80)
        );
        assert_eq!(insights.desires[0], expected);
    }

    #[test]
    fn fallback_excerpt_counts_chars_not_bytes() {
        let long = "é".repeat(100);
        let insights = analyze_market_text(&long, "");
        assert!(insights.desires[0].contains(&"é".repeat(80)));
        assert!(!insights.desires[0].contains(&"é".repeat(81)));
    }

    #[test]
    fn found_pains_suppress_pain_fallback_only() {
        let insights = analyze_market_text(BOTTLE, "I'm tired of bottles that leak everywhere");
        assert_eq!(insights.pains, vec!["I'm tired of bottles that leak everywhere"]);
        assert_eq!(insights.desires.len(), 1);
        assert!(insights.desires[0].starts_with("They want a simpler, faster way"));
    }

    #[test]
    fn keywords_draw_on_description_and_voc() {
        let insights = analyze_market_text(
            "Insulated bottle",
            "my bottle leaks\nthe bottle is heavy\ninsulated is key",
        );
        assert_eq!(insights.top_keywords, vec!["bottle", "insulated"]);
    }

    #[test]
    fn raw_notes_keep_voc_text() {
        let voc = "  line one\nline two  ";
        let insights = analyze_market_text(BOTTLE, voc);
        assert_eq!(insights.raw_notes, voc);
    }
}
