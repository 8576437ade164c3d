//! Ad configuration value types.
//!
//! Every selectable dimension (platform, objective, tone, framework) accepts
//! values outside the known set and carries them through as `Other`, so
//! generation can fall back instead of failing. Voice style is the exception:
//! it is an ordered scale and unknown values are rejected at parse time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Lowercases, maps `-`/`_` to spaces, and collapses runs of whitespace.
fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Advertising channel the copy is written for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Facebook,
    Instagram,
    TikTok,
    YouTube,
    LinkedIn,
    X,
    Display,
    Other(String),
}

impl Platform {
    pub const KNOWN: [Platform; 7] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::X,
        Platform::Display,
    ];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::X => "X (Twitter)",
            Platform::Display => "Display",
            Platform::Other(raw) => raw,
        }
    }

    /// Suggested creative aspect ratio for this platform.
    ///
    /// Unrecognized platforms get `"4:5"`.
    #[must_use]
    pub fn aspect_ratio(&self) -> &'static str {
        match self {
            Platform::Facebook => "1:1 or 4:5",
            Platform::Instagram => "4:5 (feed) or 9:16 (Reels)",
            Platform::TikTok => "9:16",
            Platform::YouTube | Platform::X => "16:9",
            Platform::LinkedIn => "1.91:1 or 1:1",
            Platform::Display => "300x250 / 728x90 / 160x600",
            Platform::Other(_) => "4:5",
        }
    }
}

impl From<&str> for Platform {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "facebook" => Platform::Facebook,
            "instagram" => Platform::Instagram,
            "tiktok" => Platform::TikTok,
            "youtube" => Platform::YouTube,
            "linkedin" => Platform::LinkedIn,
            "x" | "twitter" | "x (twitter)" => Platform::X,
            "display" => Platform::Display,
            _ => Platform::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for Platform {
    fn from(raw: String) -> Self {
        Platform::from(raw.as_str())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.label().to_string()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Objective
// ---------------------------------------------------------------------------

/// Campaign objective; drives the default call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Objective {
    Awareness,
    Traffic,
    Conversion,
    LeadGen,
    Retention,
    Other(String),
}

impl Objective {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Objective::Awareness => "Awareness",
            Objective::Traffic => "Traffic",
            Objective::Conversion => "Conversion",
            Objective::LeadGen => "Lead Gen",
            Objective::Retention => "Retention",
            Objective::Other(raw) => raw,
        }
    }
}

impl From<&str> for Objective {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "awareness" => Objective::Awareness,
            "traffic" => Objective::Traffic,
            "conversion" => Objective::Conversion,
            "lead gen" | "leadgen" => Objective::LeadGen,
            "retention" => Objective::Retention,
            _ => Objective::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for Objective {
    fn from(raw: String) -> Self {
        Objective::from(raw.as_str())
    }
}

impl From<Objective> for String {
    fn from(objective: Objective) -> Self {
        objective.label().to_string()
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Friendly,
    Professional,
    Humorous,
    Inspirational,
    Bold,
    Informative,
    Other(String),
}

impl Tone {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Humorous => "Humorous",
            Tone::Inspirational => "Inspirational",
            Tone::Bold => "Bold",
            Tone::Informative => "Informative",
            Tone::Other(raw) => raw,
        }
    }
}

impl From<&str> for Tone {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "friendly" => Tone::Friendly,
            "professional" => Tone::Professional,
            "humorous" => Tone::Humorous,
            "inspirational" => Tone::Inspirational,
            "bold" => Tone::Bold,
            "informative" => Tone::Informative,
            _ => Tone::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for Tone {
    fn from(raw: String) -> Self {
        Tone::from(raw.as_str())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.label().to_string()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// Copywriting framework used to structure one ad variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Framework {
    /// Attention, Interest, Desire, Action.
    Aida,
    /// Problem, Agitation, Solution.
    Pas,
    /// Product, Price, Place, Promotion.
    FourPs,
    /// Before, Turning Point, After.
    Story,
    Other(String),
}

impl Framework {
    pub const KNOWN: [Framework; 4] = [
        Framework::Aida,
        Framework::Pas,
        Framework::FourPs,
        Framework::Story,
    ];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Framework::Aida => "AIDA",
            Framework::Pas => "PAS",
            Framework::FourPs => "4Ps",
            Framework::Story => "Story",
            Framework::Other(raw) => raw,
        }
    }
}

impl From<&str> for Framework {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "aida" => Framework::Aida,
            "pas" => Framework::Pas,
            "4ps" | "4 ps" | "four ps" => Framework::FourPs,
            "story" => Framework::Story,
            _ => Framework::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for Framework {
    fn from(raw: String) -> Self {
        Framework::from(raw.as_str())
    }
}

impl From<Framework> for String {
    fn from(framework: Framework) -> Self {
        framework.label().to_string()
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// VoiceStyle
// ---------------------------------------------------------------------------

/// Readability level of the body copy, from plainest to most technical.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum VoiceStyle {
    VerySimple,
    Simple,
    #[default]
    Balanced,
    Technical,
}

impl VoiceStyle {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VoiceStyle::VerySimple => "Very Simple",
            VoiceStyle::Simple => "Simple",
            VoiceStyle::Balanced => "Balanced",
            VoiceStyle::Technical => "Technical",
        }
    }
}

impl FromStr for VoiceStyle {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "very simple" => Ok(VoiceStyle::VerySimple),
            "simple" => Ok(VoiceStyle::Simple),
            "balanced" => Ok(VoiceStyle::Balanced),
            "technical" => Ok(VoiceStyle::Technical),
            _ => Err(CoreError::InvalidVoiceStyle(raw.to_string())),
        }
    }
}

impl TryFrom<String> for VoiceStyle {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<VoiceStyle> for String {
    fn from(style: VoiceStyle) -> Self {
        style.label().to_string()
    }
}

impl std::fmt::Display for VoiceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CtaLabel
// ---------------------------------------------------------------------------

/// Call-to-action selector: either the objective-driven default or a fixed label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CtaLabel {
    #[default]
    DefaultForObjective,
    Label(String),
}

impl CtaLabel {
    pub const DEFAULT_SENTINEL: &'static str = "Default for Objective";
}

impl From<&str> for CtaLabel {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "default" | "default for objective" => CtaLabel::DefaultForObjective,
            _ => CtaLabel::Label(raw.to_string()),
        }
    }
}

impl From<String> for CtaLabel {
    fn from(raw: String) -> Self {
        CtaLabel::from(raw.as_str())
    }
}

impl From<CtaLabel> for String {
    fn from(cta: CtaLabel) -> Self {
        match cta {
            CtaLabel::DefaultForObjective => CtaLabel::DEFAULT_SENTINEL.to_string(),
            CtaLabel::Label(label) => label,
        }
    }
}

// ---------------------------------------------------------------------------
// AdConfig
// ---------------------------------------------------------------------------

/// User-chosen parameters for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdConfig {
    pub product_description: String,
    /// Empty means "no specific audience"; templates fall back to generic wording.
    pub target_audience: String,
    pub platform: Platform,
    pub objective: Objective,
    pub tone: Tone,
    pub brand_personality: Vec<String>,
    pub cta_label: CtaLabel,
    /// Overrides `cta_label` when non-blank.
    pub custom_cta: String,
    /// Requested frameworks in output order. Empty means AIDA only.
    pub frameworks: Vec<Framework>,
    pub voice_style: VoiceStyle,
}

impl AdConfig {
    /// Frameworks used when none are requested.
    pub const DEFAULT_FRAMEWORKS: &'static [Framework] = &[Framework::Aida];

    #[must_use]
    pub fn new(product_description: impl Into<String>) -> Self {
        Self {
            product_description: product_description.into(),
            ..Self::default()
        }
    }

    /// The frameworks to generate, substituting the default when none were requested.
    #[must_use]
    pub fn effective_frameworks(&self) -> &[Framework] {
        if self.frameworks.is_empty() {
            Self::DEFAULT_FRAMEWORKS
        } else {
            &self.frameworks
        }
    }

    /// Target audience, or `None` when blank.
    #[must_use]
    pub fn audience(&self) -> Option<&str> {
        let trimmed = self.target_audience.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            product_description: String::new(),
            target_audience: String::new(),
            platform: Platform::Facebook,
            objective: Objective::Awareness,
            tone: Tone::Friendly,
            brand_personality: vec!["Trusted".to_string()],
            cta_label: CtaLabel::DefaultForObjective,
            custom_cta: String::new(),
            frameworks: Vec::new(),
            voice_style: VoiceStyle::Balanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!(Platform::from("tiktok"), Platform::TikTok);
        assert_eq!(Platform::from("  YouTube "), Platform::YouTube);
        assert_eq!(Platform::from("X (Twitter)"), Platform::X);
        assert_eq!(Platform::from("twitter"), Platform::X);
    }

    #[test]
    fn unknown_platform_is_preserved() {
        let platform = Platform::from("Pinterest");
        assert_eq!(platform, Platform::Other("Pinterest".to_string()));
        assert_eq!(platform.to_string(), "Pinterest");
        assert_eq!(platform.aspect_ratio(), "4:5");
    }

    #[test]
    fn known_platforms_round_trip_through_label() {
        for platform in Platform::KNOWN {
            assert_eq!(Platform::from(platform.label()), platform);
        }
    }

    #[test]
    fn aspect_ratio_lookup() {
        assert_eq!(Platform::TikTok.aspect_ratio(), "9:16");
        assert_eq!(Platform::X.aspect_ratio(), "16:9");
        assert_eq!(Platform::Display.aspect_ratio(), "300x250 / 728x90 / 160x600");
    }

    #[test]
    fn objective_accepts_lead_gen_spellings() {
        assert_eq!(Objective::from("Lead Gen"), Objective::LeadGen);
        assert_eq!(Objective::from("lead-gen"), Objective::LeadGen);
        assert_eq!(Objective::from("leadgen"), Objective::LeadGen);
    }

    #[test]
    fn framework_labels() {
        assert_eq!(Framework::from("4ps"), Framework::FourPs);
        assert_eq!(Framework::from("aida"), Framework::Aida);
        assert_eq!(Framework::FourPs.to_string(), "4Ps");
        assert_eq!(
            Framework::from("Hero's Journey"),
            Framework::Other("Hero's Journey".to_string())
        );
    }

    #[test]
    fn voice_style_is_ordered() {
        assert!(VoiceStyle::VerySimple < VoiceStyle::Simple);
        assert!(VoiceStyle::Simple < VoiceStyle::Balanced);
        assert!(VoiceStyle::Balanced < VoiceStyle::Technical);
    }

    #[test]
    fn voice_style_parses_separators() {
        assert_eq!("very-simple".parse::<VoiceStyle>().unwrap(), VoiceStyle::VerySimple);
        assert_eq!("Very Simple".parse::<VoiceStyle>().unwrap(), VoiceStyle::VerySimple);
        assert_eq!("TECHNICAL".parse::<VoiceStyle>().unwrap(), VoiceStyle::Technical);
    }

    #[test]
    fn voice_style_rejects_unknown() {
        let err = "poetic".parse::<VoiceStyle>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidVoiceStyle(ref v) if v == "poetic"));
    }

    #[test]
    fn cta_label_sentinel() {
        assert_eq!(CtaLabel::from("default"), CtaLabel::DefaultForObjective);
        assert_eq!(
            CtaLabel::from("Default for Objective"),
            CtaLabel::DefaultForObjective
        );
        assert_eq!(
            CtaLabel::from("Book a Demo"),
            CtaLabel::Label("Book a Demo".to_string())
        );
    }

    #[test]
    fn effective_frameworks_defaults_to_aida() {
        let config = AdConfig::new("A thing");
        assert_eq!(config.effective_frameworks(), &[Framework::Aida]);
    }

    #[test]
    fn effective_frameworks_keeps_duplicates() {
        let mut config = AdConfig::new("A thing");
        config.frameworks = vec![Framework::Pas, Framework::Pas];
        assert_eq!(config.effective_frameworks().len(), 2);
    }

    #[test]
    fn blank_audience_is_none() {
        let mut config = AdConfig::new("A thing");
        config.target_audience = "   ".to_string();
        assert!(config.audience().is_none());
        config.target_audience = " runners ".to_string();
        assert_eq!(config.audience(), Some("runners"));
    }

    #[test]
    fn ad_config_deserializes_with_defaults() {
        let config: AdConfig = serde_json::from_str(
            r#"{"product_description": "Cold brew kit", "frameworks": ["PAS", "Story"], "voice_style": "simple"}"#,
        )
        .unwrap();
        assert_eq!(config.product_description, "Cold brew kit");
        assert_eq!(config.frameworks, vec![Framework::Pas, Framework::Story]);
        assert_eq!(config.voice_style, VoiceStyle::Simple);
        assert_eq!(config.platform, Platform::Facebook);
        assert_eq!(config.cta_label, CtaLabel::DefaultForObjective);
    }

    #[test]
    fn ad_config_rejects_unknown_voice_style() {
        let result: Result<AdConfig, _> =
            serde_json::from_str(r#"{"product_description": "x", "voice_style": "poetic"}"#);
        assert!(result.is_err());
    }
}
