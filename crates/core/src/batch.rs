//! Batch Evaluation
//!
//! Runs the pipeline over many records. Each run owns its own distribution,
//! so records are evaluated independently on the rayon pool when requested.

use rayon::prelude::*;

use crate::error::BatchError;
use crate::inference::AllowanceEngine;
use crate::record::{AllowanceRow, EmployeeRecord};

/// Evaluate a single record
pub fn evaluate_record(
    engine: &AllowanceEngine,
    record: &EmployeeRecord,
) -> Result<AllowanceRow, BatchError> {
    engine
        .compute(&record.profile())
        .map(|allowance| record.with_allowance(allowance))
        .map_err(|source| BatchError {
            record_id: record.id,
            source,
        })
}

/// Evaluate every record, preserving input order
pub fn evaluate_batch(
    engine: &AllowanceEngine,
    records: &[EmployeeRecord],
    parallel: bool,
) -> Vec<Result<AllowanceRow, BatchError>> {
    tracing::debug!(records = records.len(), parallel, "evaluating allowance batch");

    let results: Vec<_> = if parallel {
        records
            .par_iter()
            .map(|record| evaluate_record(engine, record))
            .collect()
    } else {
        records
            .iter()
            .map(|record| evaluate_record(engine, record))
            .collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = records.len(), "some records could not be evaluated");
    }
    results
}
