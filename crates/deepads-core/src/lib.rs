//! Shared value types and configuration loading for DeepAds.
//!
//! The ad, insight, and variant types here are plain data: the research and
//! copy crates produce and consume them without I/O. Environment and brief
//! file loading live in [`config`] and [`brief`].

pub mod ad;
pub mod app_config;
pub mod brief;
pub mod config;
pub mod error;
pub mod insights;
pub mod variant;

pub use ad::{AdConfig, CtaLabel, Framework, Objective, Platform, Tone, VoiceStyle};
pub use app_config::{AppConfig, Environment};
pub use brief::{load_brief, validate_brief, AdBrief};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use insights::ResearchInsights;
pub use variant::AdVariant;
