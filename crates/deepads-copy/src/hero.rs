//! Hero image collaborator.
//!
//! Real image generation is out of scope; [`HeroImageSource`] is the seam
//! where one would plug in. [`PlaceholderHeroImage`] describes a simple
//! pastel card layout instead of rendering pixels, which is enough for the
//! CLI preview and for tests.

use deepads_core::Platform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::text::{first_words, truncate_chars};

const CANVAS_WIDTH: u32 = 900;
const CANVAS_HEIGHT: u32 = 500;
const STAMP_WORDS: usize = 5;
const OVERLAY_CHARS: usize = 80;
const BLOCK_DARKEN: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[must_use]
    pub fn darken(self, amount: u8) -> Self {
        Rgb(
            self.0.saturating_sub(amount),
            self.1.saturating_sub(amount),
            self.2.saturating_sub(amount),
        )
    }
}

/// Layout of a generated hero image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroImage {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Text stamped in the centered block.
    pub stamp_text: String,
    /// Fill of the rounded block behind `stamp_text`.
    pub stamp_fill: Rgb,
    /// Pill label in the bottom-right corner.
    pub platform_tag: String,
}

/// Produces a hero image from a product description and platform.
pub trait HeroImageSource {
    fn hero_image(&self, description: &str, platform: &Platform) -> HeroImage;
}

/// Pastel placeholder card stamped with the first words of the description.
///
/// Colors are random unless a seed is given.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderHeroImage {
    seed: Option<u64>,
}

impl PlaceholderHeroImage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

fn pastel<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb(
        rng.random_range(200..=245),
        rng.random_range(200..=245),
        rng.random_range(200..=245),
    )
}

impl HeroImageSource for PlaceholderHeroImage {
    fn hero_image(&self, description: &str, platform: &Platform) -> HeroImage {
        let background = match self.seed {
            Some(seed) => pastel(&mut StdRng::seed_from_u64(seed)),
            None => pastel(&mut rand::rng()),
        };

        let stamp_text = first_words(description, STAMP_WORDS);
        let stamp_text = if stamp_text.is_empty() {
            "Your Product".to_string()
        } else {
            stamp_text
        };

        HeroImage {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background,
            stamp_text,
            stamp_fill: background.darken(BLOCK_DARKEN),
            platform_tag: format!("{platform} • DeepAds"),
        }
    }
}

/// Headline band laid over a user-supplied image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineOverlay {
    pub text: String,
    pub band_fill: Rgb,
    pub text_fill: Rgb,
}

/// Describe the dark headline band stamped near the bottom of an uploaded image.
#[must_use]
pub fn overlay_headline(headline: &str) -> HeadlineOverlay {
    HeadlineOverlay {
        text: truncate_chars(headline, OVERLAY_CHARS).to_string(),
        band_fill: Rgb(0, 0, 0),
        text_fill: Rgb(255, 255, 255),
    }
}
