use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("record source returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid source url: {0}")]
    Url(#[from] url::ParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record document parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}
