use std::sync::Arc;
use std::time::Instant;

use tokio::task::spawn_blocking;
use tracing::{debug, error, info};

use crate::config::EngineConfig;
use crate::engine::classifier::classify;
use crate::engine::errors::UploadError;
use crate::engine::summary::{ResetSummary, SetSizes, UploadSummary, RESET_MESSAGE, UPLOAD_MESSAGE};
use crate::engine::upload_gate::UploadGate;
use crate::ingest::{ensure_csv_file_name, parse_row, read_rows, StructuralError};
use crate::storage::{GenerationStore, ResultSets};
use crate::validation::Validator;

/// Drives uploads through parse, validate and classify, then publishes the result.
///
/// A new generation is always built completely before it touches the store,
/// so a failed upload leaves the previous generation in place.
pub struct IngestEngine<S: GenerationStore> {
    store: Arc<S>,
    config: Arc<EngineConfig>,
    gate: UploadGate
}

impl<S: GenerationStore> IngestEngine<S> {
    /// Creates a new engine writing into the provided store.
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self {
            gate: UploadGate::new(config.upload_policy),
            store,
            config: Arc::new(config)
        }
    }

    /// Processes one uploaded file and swaps its results in as the current generation.
    ///
    /// `file_name`, when known, must carry a `.csv` extension.
    ///
    /// # Errors
    /// Returns `UploadError` if:
    /// - The file is empty, too large, not UTF-8, or its header lacks a required column.
    /// - Another upload holds the gate and the policy is to reject.
    pub async fn upload(&self, file_name: Option<&str>, bytes: Vec<u8>) -> Result<UploadSummary, UploadError> {
        if let Some(file_name) = file_name {
            ensure_csv_file_name(file_name)?;
        }

        let _guard = self.gate.acquire().await?;
        let timer = Instant::now();
        let config = self.config.clone();

        let (sets, good_records) = spawn_blocking(move || build_result_sets(&bytes, &config))
            .await?
            .inspect_err(|error| error!("Upload rejected: {error}"))?;

        let bad_records = sets.bad_transactions.len();
        let sizes = SetSizes::of(&sets);
        let generation = self.store.replace(sets);

        info!(
            "Generation [{generation}] published in {:?}: {good_records} good, {bad_records} bad, {} account(s), {} in collections",
            timer.elapsed(), sizes.chart_of_accounts, sizes.collections_accounts
        );

        Ok(UploadSummary {
            message: UPLOAD_MESSAGE.to_string(),
            generation,
            good_records,
            bad_records,
            sizes
        })
    }

    /// Clears all three result sets. Goes through the same gate as uploads.
    pub async fn reset(&self) -> Result<ResetSummary, UploadError> {
        let _guard = self.gate.acquire().await?;
        let generation = self.store.reset();

        info!("Generation [{generation}] published: store reset");

        Ok(ResetSummary {
            message: RESET_MESSAGE.to_string(),
            generation
        })
    }
}

/// The synchronous pipeline: rows → candidates → valid/bad → chart and collections.
/// Returns the result sets and the number of transactions that reached the chart of accounts.
fn build_result_sets(bytes: &[u8], config: &EngineConfig) -> Result<(ResultSets, usize), StructuralError> {
    let rows = read_rows(bytes, config.max_upload_bytes)?;
    let validator = Validator::new(config.card_number_length);

    let mut valid = Vec::with_capacity(rows.len());
    let mut bad_transactions = Vec::new();

    for row in rows {
        match parse_row(row).and_then(|transaction| validator.validate(transaction)) {
            Ok(transaction) => valid.push(transaction),
            Err(bad) => {
                debug!("Line [{}] is a bad transaction: {}", bad.line, bad.reason);
                bad_transactions.push(bad);
            }
        }
    }

    let valid_count = valid.len();
    let collections_rule = &config.collections_rule;
    let classification = classify(valid, config.sign_convention, |account| collections_rule.matches(account));
    let good_records = valid_count - classification.rejected.len();

    //NOTE: Overflow rejections surface late, so the bad set is re-sorted to keep file order
    if !classification.rejected.is_empty() {
        bad_transactions.extend(classification.rejected);
        bad_transactions.sort_by_key(|bad| bad.line);
    }

    Ok((ResultSets {
        chart_of_accounts: classification.chart_of_accounts,
        collections_accounts: classification.collections_accounts,
        bad_transactions
    }, good_records))
}
