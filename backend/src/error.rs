use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("STATIC_DIR must not be empty")]
    EmptyStaticDir,
    #[error("UPSTREAM_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidUpstream(String),
}
