use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Missing required fields: name, email, message")]
    MissingRequiredFields,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Missing RESEND_API_KEY on server")]
    MissingApiKey,

    #[error("Email provider request failed: {0}")]
    ProviderRequestError(#[from] reqwest::Error),

    #[error("Email provider rejected the message: status {status}: {body}")]
    ProviderRejectedError { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IntakeError {
    /// Validation errors the caller can fix by correcting the submission.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingRequiredFields | Self::InvalidEmailFormat)
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
