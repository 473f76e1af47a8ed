use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: metric `{field}` must be finite, got {value}")]
    NonFiniteMetric { field: &'static str, value: f64 },

    #[error("Validation error: metric `{field}` is out of range: {reason}")]
    MetricOutOfRange { field: &'static str, reason: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
