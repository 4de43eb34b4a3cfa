use plurality_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("no registered language matches {0:?}")]
    NotFound(String),
    #[error("unable to parse language from {0:?}")]
    ParseFailure(String),
    #[error("unknown plural rule {0:?}")]
    UnknownRule(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
