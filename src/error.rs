use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TspError {
    #[error("IO Error at '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse Error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

impl TspError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type TspResult<T> = Result<T, TspError>;
