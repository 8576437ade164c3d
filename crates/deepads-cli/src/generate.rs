//! `generate` command: build an ad request from a brief and flags, then
//! print one variant per framework.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use deepads_copy::{
    generate_ad_variants_with_link_base, overlay_headline, HeadlineOverlay, HeroImage,
    HeroImageSource, PlaceholderHeroImage,
};
use deepads_core::{
    load_brief, validate_brief, AdBrief, AdConfig, AdVariant, AppConfig, CtaLabel, Framework,
    Objective, Platform, ResearchInsights, Tone, VoiceStyle,
};
use serde::Serialize;

use crate::analyze::read_voc;

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateArgs {
    /// YAML brief to start from; flags below override its fields
    #[arg(long)]
    pub brief: Option<PathBuf>,

    /// Product or offer description
    #[arg(long)]
    pub product: Option<String>,

    /// Target audience, e.g. "busy parents"
    #[arg(long)]
    pub audience: Option<String>,

    /// Facebook, Instagram, TikTok, YouTube, LinkedIn, X (Twitter), or Display
    #[arg(long)]
    pub platform: Option<String>,

    /// Awareness, Traffic, Conversion, Lead Gen, or Retention
    #[arg(long)]
    pub objective: Option<String>,

    /// Friendly, Professional, Humorous, Inspirational, Bold, or Informative
    #[arg(long)]
    pub tone: Option<String>,

    /// Brand personality tag (repeatable)
    #[arg(long = "brand")]
    pub brand_tags: Vec<String>,

    /// Copy framework: AIDA, PAS, 4Ps, or Story (repeatable, order kept)
    #[arg(long = "framework")]
    pub frameworks: Vec<String>,

    /// CTA label, or "default" to pick one from the objective
    #[arg(long)]
    pub cta: Option<String>,

    /// Custom CTA text; wins over --cta when non-blank
    #[arg(long)]
    pub custom_cta: Option<String>,

    /// Very Simple, Simple, Balanced, or Technical
    #[arg(long)]
    pub voice: Option<VoiceStyle>,

    /// File with reviews, comments, or transcripts, one statement per line
    #[arg(long)]
    pub voc_file: Option<PathBuf>,

    /// Include a placeholder hero image layout per variant
    #[arg(long)]
    pub hero: bool,

    /// Use this image as the hero instead of a placeholder
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Stamp each variant's headline over --image
    #[arg(long, requires = "image")]
    pub overlay: bool,

    /// Print insights and variants as JSON
    #[arg(long)]
    pub json: bool,
}

/// Hero preview attached to one variant.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum HeroPreview {
    Placeholder(HeroImage),
    Uploaded {
        path: String,
        overlay: Option<HeadlineOverlay>,
    },
}

#[derive(Debug, Serialize)]
struct RenderedVariant<'a> {
    #[serde(flatten)]
    variant: &'a AdVariant,
    hero: Option<HeroPreview>,
}

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    insights: &'a ResearchInsights,
    variants: Vec<RenderedVariant<'a>>,
}

/// Resolve the brief for this run.
///
/// An explicit `--brief` always loads. Otherwise the configured brief path is
/// used only when no `--product` was given and the file exists.
fn base_brief(config: &AppConfig, args: &GenerateArgs) -> anyhow::Result<AdBrief> {
    if let Some(path) = &args.brief {
        return Ok(load_brief(path)?);
    }
    if args.product.is_none() && config.brief_path.exists() {
        tracing::debug!(path = %config.brief_path.display(), "using configured brief");
        return Ok(load_brief(&config.brief_path)?);
    }
    Ok(AdBrief::default())
}

/// Overlay command-line flags on a brief.
pub(crate) fn apply_overrides(mut brief: AdBrief, args: &GenerateArgs) -> AdBrief {
    let config = &mut brief.config;
    if let Some(product) = &args.product {
        config.product_description.clone_from(product);
    }
    if let Some(audience) = &args.audience {
        config.target_audience.clone_from(audience);
    }
    if let Some(platform) = &args.platform {
        config.platform = Platform::from(platform.as_str());
    }
    if let Some(objective) = &args.objective {
        config.objective = Objective::from(objective.as_str());
    }
    if let Some(tone) = &args.tone {
        config.tone = Tone::from(tone.as_str());
    }
    if !args.brand_tags.is_empty() {
        config.brand_personality.clone_from(&args.brand_tags);
    }
    if !args.frameworks.is_empty() {
        config.frameworks = args
            .frameworks
            .iter()
            .map(|f| Framework::from(f.as_str()))
            .collect();
    }
    if let Some(cta) = &args.cta {
        config.cta_label = CtaLabel::from(cta.as_str());
    }
    if let Some(custom) = &args.custom_cta {
        config.custom_cta.clone_from(custom);
    }
    if let Some(voice) = args.voice {
        config.voice_style = voice;
    }
    brief
}

fn hero_preview(
    args: &GenerateArgs,
    source: &dyn HeroImageSource,
    config: &AdConfig,
    variant: &AdVariant,
) -> Option<HeroPreview> {
    if let Some(path) = &args.image {
        return Some(HeroPreview::Uploaded {
            path: path.display().to_string(),
            overlay: args.overlay.then(|| overlay_headline(&variant.headline)),
        });
    }
    args.hero.then(|| {
        HeroPreview::Placeholder(source.hero_image(&config.product_description, &config.platform))
    })
}

/// # Errors
///
/// Returns an error if the brief or VOC file cannot be read, or the resulting
/// request has no product description.
pub(crate) fn run_generate(app_config: &AppConfig, args: &GenerateArgs) -> anyhow::Result<()> {
    let brief = apply_overrides(base_brief(app_config, args)?, args);
    validate_brief(&brief.config)?;

    if let Some(path) = &args.image {
        if !path.is_file() {
            anyhow::bail!("hero image {} does not exist", path.display());
        }
    }

    let voc = read_voc(args.voc_file.as_deref())?.unwrap_or(brief.voc_text);
    let config = brief.config;

    let insights = deepads_research::analyze_market_text(&config.product_description, &voc);
    tracing::info!(
        frameworks = config.effective_frameworks().len(),
        platform = %config.platform,
        "generating ad variants"
    );
    let variants =
        generate_ad_variants_with_link_base(&config, &insights, &app_config.short_link_base);

    let source = PlaceholderHeroImage::new();
    let rendered: Vec<RenderedVariant<'_>> = variants
        .iter()
        .map(|variant| RenderedVariant {
            variant,
            hero: hero_preview(args, &source, &config, variant),
        })
        .collect();

    if args.json {
        let output = GenerateOutput {
            insights: &insights,
            variants: rendered,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for item in &rendered {
            println!("{}", render_variant(&config, item.variant, item.hero.as_ref()));
        }
    }

    tracing::info!(variants = variants.len(), "ad variants rendered");
    Ok(())
}

fn render_hero(out: &mut String, hero: &HeroPreview) {
    match hero {
        HeroPreview::Placeholder(image) => {
            let (r, g, b) = (image.background.0, image.background.1, image.background.2);
            let _ = writeln!(
                out,
                "Hero image: {}x{} placeholder, background #{r:02x}{g:02x}{b:02x}, \"{}\", tag \"{}\"",
                image.width, image.height, image.stamp_text, image.platform_tag
            );
        }
        HeroPreview::Uploaded { path, overlay } => match overlay {
            Some(overlay) => {
                let _ = writeln!(out, "Hero image: {path} with headline overlay \"{}\"", overlay.text);
            }
            None => {
                let _ = writeln!(out, "Hero image: {path}");
            }
        },
    }
}

/// Markdown card for one variant.
pub(crate) fn render_variant(
    config: &AdConfig,
    variant: &AdVariant,
    hero: Option<&HeroPreview>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "## [{}] [{}] [{}]",
        variant.framework, config.platform, config.objective
    );
    let _ = writeln!(out, "### {}\n", variant.headline);
    let _ = writeln!(out, "{}\n", variant.body);
    let _ = writeln!(out, "**CTA:** {}", variant.cta);
    let _ = writeln!(out, "*Short link:* `{}`", variant.short_link);
    if let Some(hero) = hero {
        render_hero(&mut out, hero);
    }
    let _ = writeln!(out, "\n**Video Prompt**\n```markdown\n{}\n```", variant.video_prompt);
    out
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
