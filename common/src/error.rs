use thiserror::Error;

/// Raised while turning user-supplied text into domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid {field}: '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("unknown age group '{0}' (expected child, adult or senior)")]
    UnknownAgeGroup(String),

    #[error("unsupported locale '{0}' (expected ko, en or ja)")]
    UnknownLocale(String),

    #[error("malformed record: expected 'height,weight[,age group]', got {0} fields")]
    MalformedRecord(usize),
}

/// Raised when a measurement cannot produce a usable BMI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{field} must be a positive finite number, got {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("measurement produced a non-finite BMI ({0})")]
    NonFinite(f64),
}
