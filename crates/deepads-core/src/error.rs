use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brief file {path}: {source}")]
    BriefFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brief file: {0}")]
    BriefFileParse(#[from] serde_yaml::Error),

    #[error("brief validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid voice style: {0} (expected very simple, simple, balanced, or technical)")]
    InvalidVoiceStyle(String),
}
