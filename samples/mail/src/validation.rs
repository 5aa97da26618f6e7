//! Mail address validation.
//!
//! The rule is deliberately loose: something, `@`, something, `.`,
//! something, with no whitespace in each part.

use railway::control::{Either, try_catch};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern a mail address must contain.
static MAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid mail regex pattern"));

/// Reasons a mail field is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MailError {
    /// The text does not look like a mail address.
    #[error("Invalid mail")]
    Invalid,
    /// The field holds something other than text.
    #[error("Mail must be text, got {0}")]
    NotText(String),
}

fn check_mail(value: &Value) -> Result<&str, MailError> {
    let text = value
        .as_str()
        .ok_or_else(|| MailError::NotText(value.to_string()))?;

    if MAIL_PATTERN.is_match(text) {
        Ok(text)
    } else {
        Err(MailError::Invalid)
    }
}

/// Validates a mail field, returning the address on the success track.
///
/// # Examples
///
/// ```
/// use mail_parsing_sample::{MailError, validate_mail};
/// use railway::control::Either;
/// use serde_json::json;
///
/// assert_eq!(validate_mail(&json!("bar@example.com")), Either::Right("bar@example.com"));
/// assert_eq!(validate_mail(&json!("bar")), Either::Left(MailError::Invalid));
/// ```
pub fn validate_mail(value: &Value) -> Either<MailError, &str> {
    let result = try_catch(check_mail)(value);
    if let Either::Left(error) = &result {
        tracing::debug!(%error, "mail rejected");
    }
    result
}
