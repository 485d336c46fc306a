use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    ///
    /// Raised for Discord IDs that are not valid snowflakes and for log levels
    /// outside of 0-3.
    #[error("Invalid value '{value}' for environment variable {var}: {reason}")]
    InvalidValue {
        /// Name of the offending variable
        var: String,
        /// The raw value read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
