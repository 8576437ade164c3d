//! Call-to-action resolution.

use deepads_core::{AdConfig, CtaLabel, Objective};

/// Resolve the CTA text for a request.
///
/// A non-blank custom CTA always wins. Otherwise the default sentinel maps
/// the objective to a fixed label, and an explicit label is used verbatim.
#[must_use]
pub fn choose_cta(config: &AdConfig) -> String {
    let custom = config.custom_cta.trim();
    if !custom.is_empty() {
        return custom.to_string();
    }

    match &config.cta_label {
        CtaLabel::DefaultForObjective => default_for_objective(&config.objective).to_string(),
        CtaLabel::Label(label) => label.clone(),
    }
}

fn default_for_objective(objective: &Objective) -> &'static str {
    match objective {
        Objective::Awareness | Objective::Traffic | Objective::Other(_) => "Learn More",
        Objective::Conversion => "Shop Now",
        Objective::LeadGen => "Get Started",
        Objective::Retention => "See What's New",
    }
}
