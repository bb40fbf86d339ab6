use thiserror::Error;

#[derive(Error, Debug)]
pub enum HcloudError {
    #[error("id or name must be set")]
    MissingIdentity,

    #[error("{type_name} has no attribute `{field}`")]
    UnknownField { type_name: String, field: String },

    #[error("Invalid value for {type_name}.{field}: {reason}")]
    InvalidField {
        type_name: String,
        field: String,
        reason: String,
    },

    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HcloudError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HcloudError::MissingIdentity => "Set an id or a name before referencing the resource",
            HcloudError::UnknownField { .. } | HcloudError::InvalidField { .. } => {
                "Switch hydration to lenient mode or fix the payload"
            }
            HcloudError::InvalidPayload { .. } => {
                "Check that the payload is a decoded API response of the expected kind"
            }
            HcloudError::IoError(_) => "Check that the input file exists and is readable",
            HcloudError::SerializationError(_) => "Check that the input is valid JSON",
            HcloudError::ConfigError { .. }
            | HcloudError::ConfigValidationError { .. }
            | HcloudError::InvalidConfigValueError { .. } => "Review the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, HcloudError>;
