use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid product record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Template is missing the `{0}` data literal")]
    TemplateMarker(&'static str),

    #[error("Schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
