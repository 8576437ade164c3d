use serde::{Deserialize, Serialize};

use crate::ad::Framework;

/// One generated ad, produced per requested framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVariant {
    pub framework: Framework,
    pub headline: String,
    /// Markdown body with bold section headings.
    pub body: String,
    pub cta: String,
    /// Placeholder campaign link derived from the framework name.
    pub short_link: String,
    /// Scene-by-scene prompt for an external video-generation tool.
    pub video_prompt: String,
}
