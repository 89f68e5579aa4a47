use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid zoom range [{start}, {end}]")]
    InvalidZoom { start: f64, end: f64 },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("telemetry registry: {0}")]
    Telemetry(String),
}

impl From<prometheus::Error> for ChartError {
    fn from(e: prometheus::Error) -> Self {
        ChartError::Telemetry(e.to_string())
    }
}

impl<E: std::fmt::Display> From<serde_path_to_error::Error<E>> for ChartError {
    fn from(e: serde_path_to_error::Error<E>) -> Self {
        ChartError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    }
}
