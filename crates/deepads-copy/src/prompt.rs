//! Scene-by-scene prompt for an external video-generation tool.

use deepads_core::{AdConfig, ResearchInsights};

use crate::text::truncate_chars;

const DESCRIPTION_CHARS: usize = 120;
const SIGNAL_LINES: usize = 3;

fn joined_or(items: &[String], fallback: &str) -> String {
    let head = &items[..items.len().min(SIGNAL_LINES)];
    if head.is_empty() {
        fallback.to_string()
    } else {
        head.join(", ")
    }
}

/// Render the three-scene (Hook / Solution / CTA) video prompt for one variant.
#[must_use]
pub fn video_prompt(
    config: &AdConfig,
    insights: &ResearchInsights,
    headline: &str,
    cta: &str,
) -> String {
    let audience = config.audience().unwrap_or("ideal customers");
    let pains = joined_or(&insights.pains, "their current frustrations");
    let desires = joined_or(&insights.desires, "the outcome they want");
    let style = if config.brand_personality.is_empty() {
        "clean, modern, trustworthy".to_string()
    } else {
        config.brand_personality.join(", ")
    };
    let description = truncate_chars(config.product_description.trim(), DESCRIPTION_CHARS);

    let prompt = format!(
        "Video ad for {platform} in {aspect} aspect ratio.

Scene 1 (Hook):
- Visual: Close-up of {audience} dealing with {pains}.
- On-screen text: \"{headline}\"

Scene 2 (Solution):
- Visual: {description} in action, clear UI/product shots.
- On-screen text: Short benefit bullets highlighting {desires}.

Scene 3 (CTA):
- Visual: Clean end card with logo and simple background.
- On-screen text: \"{cta}\"

Style: {style}.
Tone: {tone}.",
        platform = config.platform,
        aspect = config.platform.aspect_ratio(),
        tone = config.tone,
    );

    prompt.trim().to_string()
}
