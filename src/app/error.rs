use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsonewsError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Item unavailable: {0}")]
    ItemUnavailable(u64),

    #[error("Persisted state is corrupt: {0}")]
    PersistenceCorrupt(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, OsonewsError>;
