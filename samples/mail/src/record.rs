//! Field access on loosely typed records.
//!
//! A JSON record has two ways of lacking a value: the key is missing, or it
//! holds `null`. [`Field`] classifies both as absent so that
//! `Maybe::map_nullable(get("mail"))` yields `Empty` either way.

use railway::control::{IntoMaybe, Maybe};
use serde_json::Value;

/// A looked-up JSON value that may be missing or `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a>(pub Option<&'a Value>);

impl<'a> Field<'a> {
    /// Wraps a value that is known to exist but may be `null`.
    #[must_use]
    pub const fn of(value: &'a Value) -> Self {
        Self(Some(value))
    }
}

impl<'a> IntoMaybe for Field<'a> {
    type Value = &'a Value;

    fn into_maybe(self) -> Maybe<&'a Value> {
        match self.0 {
            None | Some(Value::Null) => Maybe::Empty,
            Some(value) => Maybe::Present(value),
        }
    }
}

/// Returns an accessor reading `key` from a record.
///
/// Non-object records have no fields, so the accessor yields a missing field.
///
/// # Examples
///
/// ```
/// use mail_parsing_sample::get;
/// use railway::control::Maybe;
/// use serde_json::json;
///
/// let user = json!({ "name": "foo" });
/// let name = Maybe::present(&user).map_nullable(get("name"));
/// assert_eq!(name, Maybe::present(&json!("foo")));
///
/// let mail = Maybe::present(&user).map_nullable(get("mail"));
/// assert!(mail.is_absent());
/// ```
pub fn get(key: &'static str) -> impl Fn(&Value) -> Field<'_> {
    move |record| Field(record.get(key))
}
