use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL prepended to generated campaign short links.
    pub short_link_base: String,
    /// Brief file used by `generate` when no product is passed on the command line.
    pub brief_path: PathBuf,
    /// How many keywords the analysis report lists.
    pub keyword_display_limit: usize,
    /// How many pain / desire / objection lines the analysis report lists.
    pub signal_display_limit: usize,
}
