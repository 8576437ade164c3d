//! Placeholder campaign links.

use deepads_core::Framework;

/// Build the campaign link for a framework under `base`.
///
/// Deterministic and not unique: every variant of the same framework gets
/// the same link.
#[must_use]
pub fn short_link(base: &str, framework: &Framework) -> String {
    let suffix = framework.label().to_lowercase().replace(' ', "-");
    format!("{}/{suffix}-campaign", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_frameworks() {
        assert_eq!(
            short_link("https://deepads.io", &Framework::Aida),
            "https://deepads.io/aida-campaign"
        );
        assert_eq!(
            short_link("https://deepads.io", &Framework::FourPs),
            "https://deepads.io/4ps-campaign"
        );
    }

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(
            short_link(
                "https://deepads.io",
                &Framework::Other("Hero Journey".to_string())
            ),
            "https://deepads.io/hero-journey-campaign"
        );
    }

    #[test]
    fn trailing_slash_on_base() {
        assert_eq!(
            short_link("https://go.example.com/", &Framework::Story),
            "https://go.example.com/story-campaign"
        );
    }
}
