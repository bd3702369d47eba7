use std::path::Path;

pub type GraphResult<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },
    #[error("line {line}: column '{column}' is not a number: {value:?}")]
    ParseError {
        line: u64,
        column: String,
        value: String,
    },
    #[error("line {line}: column '{column}' is not a finite number: {value:?}")]
    NonFiniteValue {
        line: u64,
        column: String,
        value: String,
    },
    #[error("line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("no benchmark rows to chart")]
    NoData,
    #[error("chart rendering service failed: {message}")]
    ServiceError { message: String },
    #[error("failed to write output file {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    pub fn service_error(message: impl Into<String>) -> Self {
        Self::ServiceError {
            message: message.into(),
        }
    }

    pub fn write_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<reqwest::Error> for GraphError {
    fn from(value: reqwest::Error) -> Self {
        Self::ServiceError {
            message: value.to_string(),
        }
    }
}
