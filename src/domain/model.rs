use crate::utils::error::{IntakeError, Result};
use crate::utils::validation;
use serde::{Deserialize, Serialize};

/// Raw form payload as it arrives over the wire. Every field is optional so
/// an absent key deserializes instead of failing; validation decides what is
/// actually missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed server-side validation.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: String,
}

impl SubmissionRequest {
    /// Checks run in the same order the form UI applies them. An empty string
    /// counts as missing, the same as an absent key.
    pub fn validate(self) -> Result<Submission> {
        let name = non_empty(self.name);
        let email = non_empty(self.email);
        let message = non_empty(self.message);

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(IntakeError::MissingRequiredFields);
        };

        if !validation::email_format_ok(&email) {
            return Err(IntakeError::InvalidEmailFormat);
        }

        Ok(Submission {
            name,
            email,
            phone: self.phone,
            service_type: self.service_type,
            message,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One outbound notification email, ready for the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}
