use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ad::{AdConfig, Framework};
use crate::ConfigError;

/// An ad request as stored on disk: the configuration plus optional
/// voice-of-customer text to mine before generating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdBrief {
    #[serde(flatten)]
    pub config: AdConfig,
    #[serde(default)]
    pub voc_text: String,
}

/// Load and validate an ad brief from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brief(path: &Path) -> Result<AdBrief, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BriefFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brief: AdBrief = serde_yaml::from_str(&content).map_err(ConfigError::BriefFileParse)?;

    validate_brief(&brief.config)?;

    Ok(brief)
}

/// Check the preconditions generation relies on.
///
/// Generation itself never fails; this is where a blank product description
/// is turned away before any copy is produced.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] describing the first problem found.
pub fn validate_brief(config: &AdConfig) -> Result<(), ConfigError> {
    if config.product_description.trim().is_empty() {
        return Err(ConfigError::Validation(
            "product description must be non-empty".to_string(),
        ));
    }

    for framework in &config.frameworks {
        if let Framework::Other(name) = framework {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "framework names must be non-empty".to_string(),
                ));
            }
        }
    }

    if config.brand_personality.iter().any(|tag| tag.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "brand personality tags must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::ad::{CtaLabel, Objective, Platform, VoiceStyle};

    fn write_brief(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_brief_parses_full_file() {
        let file = write_brief(
            r"
product_description: A reusable water bottle that keeps drinks cold for 24 hours
target_audience: hikers
platform: TikTok
objective: Conversion
tone: Bold
brand_personality: [Playful, Trusted]
cta_label: default
frameworks: [AIDA, PAS, 4Ps]
voice_style: very simple
voc_text: |
  I'm tired of bottles that leak everywhere
  I wish my water stayed cold on long hikes
",
        );
        let brief = load_brief(file.path()).unwrap();
        assert_eq!(brief.config.platform, Platform::TikTok);
        assert_eq!(brief.config.objective, Objective::Conversion);
        assert_eq!(brief.config.cta_label, CtaLabel::DefaultForObjective);
        assert_eq!(brief.config.voice_style, VoiceStyle::VerySimple);
        assert_eq!(
            brief.config.frameworks,
            vec![Framework::Aida, Framework::Pas, Framework::FourPs]
        );
        assert_eq!(brief.config.brand_personality, vec!["Playful", "Trusted"]);
        assert!(brief.voc_text.contains("leak everywhere"));
    }

    #[test]
    fn load_brief_applies_defaults() {
        let file = write_brief("product_description: Standing desk\n");
        let brief = load_brief(file.path()).unwrap();
        assert_eq!(brief.config.platform, Platform::Facebook);
        assert!(brief.config.frameworks.is_empty());
        assert!(brief.voc_text.is_empty());
    }

    #[test]
    fn load_brief_missing_file() {
        let result = load_brief(Path::new("/nonexistent/brief.yaml"));
        assert!(matches!(result, Err(ConfigError::BriefFileIo { .. })));
    }

    #[test]
    fn load_brief_invalid_yaml() {
        let file = write_brief("product_description: [unclosed");
        let result = load_brief(file.path());
        assert!(matches!(result, Err(ConfigError::BriefFileParse(_))));
    }

    #[test]
    fn load_brief_rejects_blank_description() {
        let file = write_brief("product_description: '   '\n");
        let result = load_brief(file.path());
        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("product description")),
            "expected validation error, got: {result:?}"
        );
    }

    #[test]
    fn validate_brief_rejects_blank_brand_tag() {
        let mut config = AdConfig::new("Standing desk");
        config.brand_personality = vec!["Minimal".to_string(), " ".to_string()];
        assert!(matches!(
            validate_brief(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_brief_rejects_blank_framework() {
        let mut config = AdConfig::new("Standing desk");
        config.frameworks = vec![Framework::Other(String::new())];
        assert!(matches!(
            validate_brief(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_brief_accepts_unknown_framework() {
        let mut config = AdConfig::new("Standing desk");
        config.frameworks = vec![Framework::Other("Hero's Journey".to_string())];
        assert!(validate_brief(&config).is_ok());
    }
}
