//! Template-driven ad copy for DeepAds.
//!
//! Given an [`AdConfig`](deepads_core::AdConfig) and
//! [`ResearchInsights`](deepads_core::ResearchInsights), fills one fixed
//! template per requested copywriting framework and returns the resulting
//! [`AdVariant`](deepads_core::AdVariant)s. No step here can fail: unknown
//! frameworks, platforms, and objectives fall back to generic wording.

pub mod cta;
pub mod generate;
pub mod hero;
pub mod link;
pub mod prompt;
pub mod voice;

mod body;
mod context;
mod headline;
mod text;

pub use cta::choose_cta;
pub use generate::{generate_ad_variants, generate_ad_variants_with_link_base};
pub use hero::{
    overlay_headline, HeadlineOverlay, HeroImage, HeroImageSource, PlaceholderHeroImage, Rgb,
};
pub use link::short_link;
pub use prompt::video_prompt;
pub use voice::apply_voice_style;
