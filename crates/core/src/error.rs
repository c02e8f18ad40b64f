#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Shorthand for a missing required environment variable.
    pub fn missing_env(name: &str) -> Self {
        CoreError::Configuration(format!("{name} must be set"))
    }

    /// Shorthand for an environment variable that failed to parse.
    pub fn invalid_env(name: &str, value: &str, expected: &str) -> Self {
        CoreError::Configuration(format!("{name}={value:?} is not a valid {expected}"))
    }
}
