//! The mail extraction pipeline.
//!
//! ```text
//! record --Maybe--> mail field --Either--> validated mail
//!                                   \--catch--> error message
//! absent record or field ----------------------> fallback
//! ```

use railway::control::{Either, Maybe};
use serde_json::Value;

use crate::record::{Field, get};
use crate::validation::{MailError, validate_mail};

/// Extracts the mail of `user`.
///
/// Returns the address when it is valid, the validation message when it is
/// not, and `fallback` when the record or its `mail` field is absent.
/// Validation never runs for an absent record.
///
/// # Examples
///
/// ```
/// use mail_parsing_sample::parse_mail;
/// use serde_json::json;
///
/// assert_eq!(parse_mail(&json!({ "name": "foo", "mail": "bar@example.com" }), "no mail"), "bar@example.com");
/// assert_eq!(parse_mail(&json!({ "name": "foo", "mail": "bar" }), "no mail"), "Invalid mail");
/// assert_eq!(parse_mail(&json!(null), "no mail"), "no mail");
/// ```
pub fn parse_mail(user: &Value, fallback: &str) -> String {
    parse_mail_with(user, fallback, validate_mail)
}

/// Runs the pipeline of [`parse_mail`] with `validate` in place of
/// [`validate_mail`].
///
/// `validate` is called at most once, and only when the record has a
/// `mail` field.
pub fn parse_mail_with<'a, V>(user: &'a Value, fallback: &str, validate: V) -> String
where
    V: FnOnce(&'a Value) -> Either<MailError, &'a str>,
{
    Maybe::new(Field::of(user))
        .map_nullable(get("mail"))
        .chain(|mail| {
            validate(mail)
                .map(str::to_owned)
                .catch(|error| error.to_string())
                .into_maybe()
        })
        .get_or_else_with(|| {
            tracing::debug!("no mail field, using fallback");
            fallback.to_owned()
        })
}
