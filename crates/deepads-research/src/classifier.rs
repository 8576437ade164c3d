//! Trigger-phrase classifier for voice-of-customer lines.

/// Phrases marking a line as a pain point.
pub(crate) const PAIN_TRIGGERS: &[&str] = &[
    "frustrated",
    "tired of",
    "annoyed",
    "hate",
    "sick of",
    "doesn't work",
    "does not work",
];

/// Phrases marking a line as a desire or wanted outcome.
pub(crate) const DESIRE_TRIGGERS: &[&str] = &[
    "want",
    "wish",
    "would love",
    "looking for",
    "need",
    "dream",
];

/// Phrases marking a line as an objection or doubt.
pub(crate) const OBJECTION_TRIGGERS: &[&str] = &[
    "worried",
    "not sure",
    "concerned",
    "skeptical",
    "afraid",
];

/// VOC lines bucketed by trigger phrase, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLines {
    pub pains: Vec<String>,
    pub desires: Vec<String>,
    pub objections: Vec<String>,
}

fn matches_any(lower: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| lower.contains(trigger))
}

/// Split text into trimmed non-empty lines and bucket each one.
///
/// Matching is a case-insensitive substring test. Buckets are not exclusive:
/// a line may be a pain and a desire at once, or neither. Lines are stored
/// trimmed but otherwise verbatim.
#[must_use]
pub fn classify_lines(text: &str) -> ClassifiedLines {
    let mut classified = ClassifiedLines::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();
        if matches_any(&lower, PAIN_TRIGGERS) {
            classified.pains.push(line.to_string());
        }
        if matches_any(&lower, DESIRE_TRIGGERS) {
            classified.desires.push(line.to_string());
        }
        if matches_any(&lower, OBJECTION_TRIGGERS) {
            classified.objections.push(line.to_string());
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_empty_buckets() {
        assert_eq!(classify_lines(""), ClassifiedLines::default());
        assert_eq!(classify_lines("\n\n   \n"), ClassifiedLines::default());
    }

    #[test]
    fn pain_line_is_kept_verbatim() {
        let classified = classify_lines("  I'm tired of bottles that leak everywhere  ");
        assert_eq!(
            classified.pains,
            vec!["I'm tired of bottles that leak everywhere"]
        );
        assert!(classified.desires.is_empty());
        assert!(classified.objections.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let classified = classify_lines("FRUSTRATED with my current setup");
        assert_eq!(classified.pains.len(), 1);
    }

    #[test]
    fn line_can_land_in_several_buckets() {
        let classified =
            classify_lines("I hate waiting and I want something faster, but I'm worried about cost");
        assert_eq!(classified.pains.len(), 1);
        assert_eq!(classified.desires.len(), 1);
        assert_eq!(classified.objections.len(), 1);
    }

    #[test]
    fn unmatched_lines_are_dropped() {
        let classified = classify_lines("The color is blue\nIt ships in a box");
        assert_eq!(classified, ClassifiedLines::default());
    }

    #[test]
    fn order_follows_input() {
        let classified = classify_lines("I need speed\nnothing here\nI wish it were lighter\nI dream of quiet");
        assert_eq!(
            classified.desires,
            vec!["I need speed", "I wish it were lighter", "I dream of quiet"]
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let classified = classify_lines("I'm annoyed by the lid\r\nnot sure it fits\r\n");
        assert_eq!(classified.pains, vec!["I'm annoyed by the lid"]);
        assert_eq!(classified.objections, vec!["not sure it fits"]);
    }

    #[test]
    fn substring_triggers_match_inside_words() {
        // "want" inside "wanted", "hate" inside "whatever"
        let classified = classify_lines("I wanted more\nwhatever works");
        assert_eq!(classified.desires, vec!["I wanted more"]);
        assert_eq!(classified.pains, vec!["whatever works"]);
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "I hate leaks\nI want cold water\nworried about weight\nI need a handle";
        assert_eq!(classify_lines(text), classify_lines(text));
    }
}
