use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No game id found in {path}")]
    MissingGameId { path: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
