use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockhandError {
    #[error("required input missing: {0}")]
    MissingInput(String),

    #[error("no docker compose found (tried `docker compose` and `docker-compose`)")]
    ComposeNotFound,

    #[error("secure store error: {0}")]
    Store(String),

    #[error("value for {0} contains a double quote or newline and cannot be written to .env")]
    Unencodable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DockhandError>;
