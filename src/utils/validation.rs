use crate::utils::error::{IntakeError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Same pattern the form UI applies before it sends anything.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub fn email_format_ok(email: &str) -> bool {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    re.is_match(email)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IntakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IntakeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IntakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_format_ok(value) {
        return Err(IntakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid email address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IntakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(email_format_ok("jane@example.com"));
        assert!(email_format_ok("a.b+c@mail.co.uk"));
        assert!(!email_format_ok("foo@bar"));
        assert!(!email_format_ok("foo.com"));
        assert!(!email_format_ok("two words@example.com"));
        assert!(!email_format_ok(""));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("provider_endpoint", "https://api.resend.com/emails").is_ok());
        assert!(validate_url("provider_endpoint", "http://localhost:3000").is_ok());
        assert!(validate_url("provider_endpoint", "").is_err());
        assert!(validate_url("provider_endpoint", "invalid-url").is_err());
        assert!(validate_url("provider_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("subject", "New web quote request:").is_ok());
        assert!(validate_non_empty_string("subject", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("to_address", "contact@htelectrical.us").is_ok());
        assert!(validate_email("to_address", "not-an-address").is_err());
    }
}
