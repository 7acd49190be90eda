// Engine errors
// Typed failures for precondition violations - the engine never panics on bad input

use thiserror::Error;

/// Errors that can occur during generation
#[derive(Debug, Error)]
pub enum EngineError {
    /// A degenerate numeric input (zero-length pattern, zero bars, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A note or key name that is not part of the chromatic table
    #[error("unknown note name: {0}")]
    UnknownNote(String),
}

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidArgument("steps must be > 0".to_string());
        assert_eq!(err.to_string(), "invalid argument: steps must be > 0");

        let err = EngineError::UnknownNote("H".to_string());
        assert_eq!(err.to_string(), "unknown note name: H");
    }
}
