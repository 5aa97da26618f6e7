//! # Mail Parsing Sample
//!
//! Extracts and validates the `mail` field of a loosely typed JSON record
//! using railway's `Maybe` and `Either`.
//!
//! ## Module Structure
//!
//! - `record`: Field access on JSON records, with `null` and missing keys
//!   both treated as absent
//! - `validation`: Mail format validation (`MailError`)
//! - `pipeline`: The `parse_mail` pipeline
//! - `stream`: Line-delimited record processing for the binary
//! - `config`: Settings read from the environment

#![forbid(unsafe_code)]

pub mod config;
pub mod pipeline;
pub mod record;
pub mod stream;
pub mod validation;

pub use config::{ConfigError, SampleConfig};
pub use pipeline::{parse_mail, parse_mail_with};
pub use record::{Field, get};
pub use stream::{RecordError, StreamSummary, decode_record, process_records};
pub use validation::{MailError, validate_mail};
