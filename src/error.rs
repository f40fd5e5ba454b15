use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenSweepError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Threshold Grid: {0}")]
    InvalidGrid(String),

    #[error("Duplicate Series Name: {0}")]
    DuplicateSeriesName(String),

    #[error("Metric Not Found: {0}")]
    MetricNotFound(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type OswResult<T> = Result<T, OpenSweepError>;
