//! Waitlist signup validation and wire types.

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for `POST /api/waitlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistRequest {
    pub name: String,
    pub email: String,
}

/// Success body: a boolean acknowledgment only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Rejections reported inline to the submitter.
///
/// The display strings are the wire contract; clients show them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    EmailInvalid,
}

/// A validated name/email pair, trimmed and with the email lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub name: String,
    pub email: String,
}

impl SignupRecord {
    /// The spreadsheet row for this signup: `[name, email, ISO-8601 timestamp]`.
    pub fn submission_row(&self, submitted_at: DateTime<Utc>) -> [String; 3] {
        [
            self.name.clone(),
            self.email.clone(),
            submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ]
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// True when `email` has a non-empty local part, a single `@`, and a dotted
/// domain, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validate a raw submission into a [`SignupRecord`].
///
/// Name must be non-empty after trimming. The email is matched as given —
/// padding counts as whitespace and fails the pattern — and is lowercased
/// only on accept. Checks run in order so the first failure is the one
/// reported.
pub fn validate(name: &str, email: &str) -> Result<SignupRecord, SignupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SignupError::NameRequired);
    }

    if email.is_empty() {
        return Err(SignupError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(SignupError::EmailInvalid);
    }

    Ok(SignupRecord {
        name: name.to_string(),
        email: email.trim().to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_email_acceptance() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn test_email_rejection() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_validate_trims_name_and_lowercases_email() {
        let record = validate("  Ann  ", "Ann@X.COM").unwrap();
        assert_eq!(record.name, "Ann");
        assert_eq!(record.email, "ann@x.com");
        // Padded emails fail the pattern rather than being trimmed first.
        assert_eq!(
            validate("Ann", " ann@x.com "),
            Err(SignupError::EmailInvalid)
        );
    }

    #[test]
    fn test_validate_error_order() {
        assert_eq!(validate("", "ann@x.com"), Err(SignupError::NameRequired));
        assert_eq!(validate("   ", "bad"), Err(SignupError::NameRequired));
        assert_eq!(validate("Ann", ""), Err(SignupError::EmailRequired));
        assert_eq!(validate("Ann", "bad"), Err(SignupError::EmailInvalid));
    }

    #[test]
    fn test_error_messages_are_wire_contract() {
        assert_eq!(SignupError::NameRequired.to_string(), "Name is required");
        assert_eq!(SignupError::EmailRequired.to_string(), "Email is required");
        assert_eq!(SignupError::EmailInvalid.to_string(), "Invalid email address");
    }

    #[test]
    fn test_submission_row_timestamp() {
        let record = validate("Ann", "ann@x.com").unwrap();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let row = record.submission_row(at);
        assert_eq!(row[0], "Ann");
        assert_eq!(row[1], "ann@x.com");
        assert_eq!(row[2], "2025-06-01T12:30:00.000Z");
    }
}
