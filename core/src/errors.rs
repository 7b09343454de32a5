use thiserror::Error;

#[derive(Error, Debug)]
pub enum OjisanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Failure surfaced by a [`Generator`](crate::generator::Generator).
///
/// The adapter hands this value back to the caller untouched, so `Display`
/// is exactly what ends up in the invocation's error result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("empty name")]
    EmptyTargetName,

    #[error("{field} must not be negative: {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("{field} exceeds the limit of {max}: {value}")]
    CountTooLarge {
        field: &'static str,
        value: i64,
        max: usize,
    },

    #[error("{0}")]
    Engine(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to load configuration from {origin}: {error}")]
    LoadFailed {
        origin: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("YAML serialization failed: {reason}")]
    Yaml { reason: String },
}

pub type Result<T> = std::result::Result<T, OjisanError>;

impl From<serde_yaml::Error> for OjisanError {
    fn from(err: serde_yaml::Error) -> Self {
        OjisanError::Serialization(SerializationError::Yaml {
            reason: err.to_string(),
        })
    }
}
