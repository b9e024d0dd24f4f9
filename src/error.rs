#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Connection error: {0}")]
    Connectivity(String),

    #[error("Malformed salary range '{0}', expected <min>-<max>")]
    MalformedRange(String),

    #[error("Store I/O error: {0}")]
    Store(#[from] std::io::Error),

    #[error("Store document is not in the expected format: {0}")]
    CorruptStore(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

