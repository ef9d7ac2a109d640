use thiserror::Error;

/// Errors produced by the analytics engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A submitted sample was NaN or infinite. The engine state is left untouched.
    #[error("non-finite sample value: {0}")]
    NonFiniteValue(f64),

    /// A configuration value is outside its usable range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
