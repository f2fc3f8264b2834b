use thiserror::Error;

/// Top-level error type for the hoist workspace.
#[derive(Debug, Error)]
pub enum HoistError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sizing error: {0}")]
    Sizing(#[from] SizingError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Sizing input validation errors.
///
/// Copy + static quantity names for cheap propagation through the math.
/// Every entry point validates eagerly, so NaN or infinity never leaks out
/// of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SizingError {
    #[error("{quantity} is not finite: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("{quantity} must be > 0, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("{quantity} must be >= 0, got {value}")]
    Negative { quantity: &'static str, value: f64 },

    #[error("Division by zero: {quantity} is 0")]
    DivideByZero { quantity: &'static str },

    #[error("Efficiency must be in (0, 1], got {value}")]
    EfficiencyRange { value: f64 },

    #[error("Candidate ratio set is empty")]
    EmptyCatalog,
}
