use serde::{Deserialize, Serialize};

/// Signals mined from the product description and voice-of-customer text.
///
/// Produced once per analysis call and read by the variant generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchInsights {
    /// Repeated keywords, most frequent first. At most 15, each seen more than once.
    pub top_keywords: Vec<String>,
    /// Lines describing frustrations, in input order.
    pub pains: Vec<String>,
    /// Lines describing wants and outcomes, in input order.
    pub desires: Vec<String>,
    /// Lines voicing doubts. May be empty; there is no fallback.
    pub objections: Vec<String>,
    /// The voice-of-customer text the signals were mined from.
    pub raw_notes: String,
}

impl ResearchInsights {
    /// Highest-ranked keyword, if any repeated word was found.
    #[must_use]
    pub fn top_keyword(&self) -> Option<&str> {
        self.top_keywords.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_objections(&self) -> bool {
        !self.objections.is_empty()
    }
}
