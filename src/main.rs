use std::io::{stderr, stdout};
use std::path::Path;
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use csv::Writer;
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use batch_transfer::config::Settings;
use batch_transfer::engine::{BatchEngine, BatchOutcome};
use batch_transfer::models::{BatchRequest, BatchTransfer, ValidationError};
use batch_transfer::storage::MemoryStore;

const EXIT_REJECTED: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: batch-transfer [input].csv [batch_name] [approver] [log_level:optional] > [report].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = Path::new(&args[1]);
    let request = BatchRequest::new(args[2].as_str(), args[3].as_str());
    let log_level = log_level_from_arg(args.get(4));

    setup_logging(log_level);

    let settings = Settings::from_env();
    let store = Arc::new(MemoryStore::new());
    let engine = BatchEngine::new(store, &settings);

    let timer = Instant::now();
    let outcome = engine.run(path, &request).await?;
    let duration = timer.elapsed();

    info!("Processed batch file in: {duration:?}");

    match outcome {
        BatchOutcome::Accepted(batch) => write_summary_to_stdout(&batch)?,
        BatchOutcome::Rejected(errors) => {
            write_errors_to_stdout(&errors)?;
            exit(EXIT_REJECTED);
        }
    }

    Ok(())
}

fn log_level_from_arg(argument: Option<&String>) -> LevelFilter {
    let Some(argument) = argument else {
        return LevelFilter::ERROR;
    };

    LevelFilter::from_str(argument).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{argument}', defaulting to 'error'");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, logging goes to stderr
    let stderr_log = fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(stderr_log)
        .init();
}

/// One line summary of an accepted batch, the transactions themselves stay in the store.
#[derive(Serialize)]
struct SummaryRow<'a> {
    name: &'a str,
    approver: &'a str,
    total_amount: String,
    number_of_payments: usize,
    average_payment_value: Option<String>
}

impl<'a> From<&'a BatchTransfer> for SummaryRow<'a> {
    fn from(batch: &'a BatchTransfer) -> Self {
        Self {
            name: &batch.name,
            approver: &batch.approver,
            total_amount: batch.total_amount.normalize().to_string(),
            number_of_payments: batch.number_of_payments,
            average_payment_value: batch.average_payment_value.map(|average| average.normalize().to_string())
        }
    }
}

fn write_summary_to_stdout(batch: &BatchTransfer) -> Result<()> {
    let mut output = Writer::from_writer(stdout().lock());

    output.serialize(SummaryRow::from(batch))?;
    output.flush()?;

    Ok(())
}

fn write_errors_to_stdout(errors: &[ValidationError]) -> Result<()> {
    let mut output = Writer::from_writer(stdout().lock());

    for error in errors {
        output.serialize(error)?;
    }

    output.flush()?;

    Ok(())
}
