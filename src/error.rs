use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dataset not found: '{0}'")]
    DatasetNotFound(String),

    #[error("Dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Failed to read dataset: {0}")]
    Io(String),

    #[error("No coach selected")]
    NoCoachSelected,

    #[error("Coach not found: {0}")]
    CoachNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

impl AppError {
    /// True for the failures that only affect the coach section of the dashboard.
    pub fn is_missing_selection(&self) -> bool {
        matches!(self, AppError::NoCoachSelected | AppError::CoachNotFound(_))
    }
}
