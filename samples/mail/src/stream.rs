//! Line-delimited record processing for the `mail-parser` binary.
//!
//! Each line holds one JSON record. A line that cannot be decoded, either
//! because it is not UTF-8 or not JSON, is logged and skipped; only a
//! failure of the stream itself stops processing.

use std::io::{self, BufRead, Write};
use std::string::FromUtf8Error;

use railway::control::{Either, try_catch};
use serde_json::Value;
use thiserror::Error;

use crate::pipeline::parse_mail;

/// Reasons a single line is skipped.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
    /// The line is not a JSON value.
    #[error("line is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Counts of lines handled by [`process_records`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Lines that produced an output line.
    pub processed: usize,
    /// Lines that could not be decoded.
    pub skipped: usize,
}

fn parse_line(bytes: Vec<u8>) -> Result<Value, RecordError> {
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Decodes one raw line into a JSON record.
pub fn decode_record(bytes: Vec<u8>) -> Either<RecordError, Value> {
    try_catch(parse_line)(bytes)
}

/// Reads records from `reader` and writes one [`parse_mail`] result per
/// decodable record to `writer`.
///
/// Blank lines are ignored and undecodable lines are skipped with a
/// warning.
///
/// # Errors
///
/// Returns the I/O error if reading from `reader` or writing to `writer`
/// fails.
pub fn process_records<R, W>(reader: R, mut writer: W, fallback: &str) -> io::Result<StreamSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = StreamSummary::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match decode_record(line) {
            Either::Right(record) => {
                writeln!(writer, "{}", parse_mail(&record, fallback))?;
                tracing::info!(line = index + 1, "record processed");
                summary.processed += 1;
            }
            Either::Left(error) => {
                tracing::warn!(line = index + 1, %error, "skipping unreadable record");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
