//! Variant generation entry points.

use deepads_core::config::DEFAULT_SHORT_LINK_BASE;
use deepads_core::{AdConfig, AdVariant, ResearchInsights};

use crate::body::body;
use crate::context::CopyContext;
use crate::cta::choose_cta;
use crate::headline::headline;
use crate::link::short_link;
use crate::prompt::video_prompt;
use crate::voice::apply_voice_style;

/// Generate one variant per requested framework, linking under the default base.
///
/// See [`generate_ad_variants_with_link_base`].
#[must_use]
pub fn generate_ad_variants(config: &AdConfig, insights: &ResearchInsights) -> Vec<AdVariant> {
    generate_ad_variants_with_link_base(config, insights, DEFAULT_SHORT_LINK_BASE)
}

/// Generate one variant per requested framework.
///
/// Variants follow the request order and duplicates are kept; an empty
/// framework list yields a single AIDA variant. The CTA is the same for every
/// variant in a request.
#[must_use]
pub fn generate_ad_variants_with_link_base(
    config: &AdConfig,
    insights: &ResearchInsights,
    link_base: &str,
) -> Vec<AdVariant> {
    let ctx = CopyContext::new(config, insights);
    let cta = choose_cta(config);

    let variants: Vec<AdVariant> = config
        .effective_frameworks()
        .iter()
        .map(|framework| {
            let headline = headline(&ctx, framework);
            let body = apply_voice_style(&body(&ctx, framework), config.voice_style);
            let video_prompt = video_prompt(config, insights, &headline, &cta);

            AdVariant {
                framework: framework.clone(),
                headline,
                body,
                cta: cta.clone(),
                short_link: short_link(link_base, framework),
                video_prompt,
            }
        })
        .collect();

    tracing::debug!(
        variants = variants.len(),
        platform = %config.platform,
        voice = %config.voice_style,
        "ad variants generated"
    );

    variants
}
