//! mail-parser
//!
//! Reads one JSON record per line from stdin and prints the mail of each.
//!
//! # Usage
//!
//! ```bash
//! # Demonstration records
//! cargo run --bin mail-parser -- --demo
//!
//! # Records from stdin
//! printf '%s\n' '{"name":"foo","mail":"bar@example.com"}' 'null' | cargo run --bin mail-parser
//! ```

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use mail_parsing_sample::{SampleConfig, parse_mail, process_records};
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn demo_records() -> Vec<Value> {
    vec![
        json!({ "name": "foo", "mail": "bar@example.com" }),
        json!({ "name": "foo", "mail": "bar" }),
        Value::Null,
    ]
}

fn main() -> ExitCode {
    let config = match SampleConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("mail-parser: {error}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(mail_parsing_sample::config::DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let demo = std::env::args().any(|argument| argument == "--demo") || io::stdin().is_terminal();
    if demo {
        tracing::info!("running demonstration records");
        for record in demo_records() {
            println!("{}", parse_mail(&record, &config.fallback));
        }
        return ExitCode::SUCCESS;
    }

    match process_records(io::stdin().lock(), io::stdout().lock(), &config.fallback) {
        Ok(summary) => {
            tracing::info!(
                processed = summary.processed,
                skipped = summary.skipped,
                "input exhausted"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "failed to process stdin");
            ExitCode::FAILURE
        }
    }
}
