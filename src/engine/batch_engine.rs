use crate::config::Settings;
use crate::engine::{read_table, BatchOutcome, IngestError, IngestOutcome, RawTable};
use crate::models::{BatchRequest, BatchTransfer, SubmissionError, Transaction, ValidationError};
use crate::storage::TransferStore;
use crate::types::RowIndex;
use crate::validation::{missing_headers, normalize_record, resolve_columns};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

/// Turns uploaded transfer tables into stored batches.
///
/// A table is accepted only as a whole: a single broken row rejects every row
/// of the upload and nothing reaches the store.
pub struct BatchEngine<S: TransferStore> {
    store: Arc<S>,
    approvers: Vec<String>
}

impl<S: TransferStore> BatchEngine<S> {
    /// Creates a new engine writing accepted batches into `store`.
    pub fn new(store: Arc<S>, settings: &Settings) -> Self {
        Self {
            store,
            approvers: settings.approvers.clone()
        }
    }

    /// Parses the whole table off the async runtime and resolves once with every row.
    pub async fn parse<R>(&self, source: R) -> Result<RawTable, IngestError>
    where
        R: Read + Send + 'static,
    {
        let table = spawn_blocking(move || read_table(source)).await??;

        debug!("Parsed table with {} column(s) and {} row(s)", table.headers.len(), table.rows.len());

        Ok(table)
    }

    /// Runs the schema check and then every field rule over a parsed table.
    pub fn validate(&self, table: &RawTable) -> IngestOutcome {
        let headers = table.header_names();

        let Some(columns) = resolve_columns(&headers) else {
            warn!("Rejected table, missing required column(s): {:?}", missing_headers(&headers));
            return IngestOutcome::Rejected(vec![ValidationError::schema()]);
        };

        let mut errors = Vec::new();
        let mut transactions = Vec::with_capacity(table.rows.len());

        for (index, row) in table.rows.iter().enumerate() {
            let row_index = index as RowIndex + 1;

            let record = columns.adapt(row);

            match normalize_record(&record, row_index) {
                Ok(transaction) => {
                    debug!("Row [{row_index}] accepted for account [{}]", transaction.account_number);
                    transactions.push(transaction);
                }
                Err(row_errors) => {
                    for error in &row_errors {
                        warn!("{error}");
                    }
                    errors.extend(row_errors);
                }
            }
        }

        if !errors.is_empty() {
            info!("Rejected table with {} error(s), discarding {} valid row(s)", errors.len(), transactions.len());
            return IngestOutcome::Rejected(errors);
        }

        IngestOutcome::Accepted(transactions)
    }

    /// Parses and validates a table from any reader.
    ///
    /// Content problems, including input that is not CSV at all, come back as
    /// `IngestOutcome::Rejected`; only a failed parse task is an `Err`.
    pub async fn ingest<R>(&self, source: R) -> Result<IngestOutcome, IngestError>
    where
        R: Read + Send + 'static,
    {
        match self.parse(source).await {
            Ok(table) => Ok(self.validate(&table)),
            Err(IngestError::Malformed(error)) => {
                warn!("Rejected unreadable table: {error}");
                Ok(IngestOutcome::Rejected(vec![ValidationError::schema()]))
            }
            Err(error) => Err(error)
        }
    }

    /// Opens `path` and ingests it.
    pub async fn ingest_path(&self, path: &Path) -> Result<IngestOutcome, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.display().to_string(),
            source
        })?;

        self.ingest(BufReader::new(file)).await
    }

    /// Aggregates accepted transactions for `request` and appends them to the store.
    ///
    /// # Errors
    /// Returns `SubmissionError` if the request is incomplete, names an unknown
    /// approver, or the totals overflow. The store is untouched in that case.
    pub fn submit(&self, request: &BatchRequest, transactions: Vec<Transaction>) -> Result<BatchTransfer, SubmissionError> {
        request.validate(&self.approvers)?;

        let batch = BatchTransfer::aggregate(transactions, &request.name, &request.approver)?;

        if batch.average_payment_value.is_none() {
            warn!("Batch [{}] carries no payments, average payment value is undefined", batch.name);
        }

        self.store.add_transactions(batch.transactions.clone());
        self.store.add_batch_transfer(batch.clone());

        info!(
            "Batch [{}] approved by [{}]: {} payment(s) totalling {}",
            batch.name, batch.approver, batch.number_of_payments, batch.total_amount
        );

        Ok(batch)
    }

    /// Orchestrates the end-to-end pipeline for a CSV file on disk.
    pub async fn run(&self, path: &Path, request: &BatchRequest) -> anyhow::Result<BatchOutcome> {
        request.validate(&self.approvers)?;

        match self.ingest_path(path).await? {
            IngestOutcome::Accepted(transactions) => Ok(BatchOutcome::Accepted(self.submit(request, transactions)?)),
            IngestOutcome::Rejected(errors) => Ok(BatchOutcome::Rejected(errors))
        }
    }
}
