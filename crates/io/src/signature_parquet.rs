//! Parquet codec for anomaly signatures.
//!
//! A signature file is one row per elapsed hour, columns `offset_hours`
//! and `deviation`, with the source interval stored as `source_start` and
//! `source_end` dates in the schema metadata.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, AsArray, Float64Array, RecordBatch, UInt32Array};
use arrow::datatypes::{DataType, Field, Float64Type, Schema, UInt32Type};
use helios_detect::Interval;
use helios_edit::AnomalySignature;
use tracing::debug;

use crate::batches::{read_batches, validate_columns, write_batches};
use crate::dates::parse_date;
use crate::error::IoError;

/// Expected column names for a signature file.
const SIGNATURE_COLUMNS: [&str; 2] = ["offset_hours", "deviation"];

/// Schema metadata key holding the source interval's first day.
const SOURCE_START_KEY: &str = "source_start";

/// Schema metadata key holding the source interval's last day.
const SOURCE_END_KEY: &str = "source_end";

fn signature_schema(source: Interval) -> Schema {
    Schema::new_with_metadata(
        vec![
            Field::new("offset_hours", DataType::UInt32, false),
            Field::new("deviation", DataType::Float64, false),
        ],
        HashMap::from([
            (SOURCE_START_KEY.to_string(), source.start().to_string()),
            (SOURCE_END_KEY.to_string(), source.end().to_string()),
        ]),
    )
}

/// Writes an anomaly signature to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if the file cannot be written.
pub fn write_signature(path: &Path, signature: &AnomalySignature) -> Result<(), IoError> {
    let offsets: Vec<u32> = (0..signature.len() as u32).collect();
    let schema = signature_schema(signature.source());
    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt32Array::from(offsets)),
        Arc::new(Float64Array::from(signature.deviations().to_vec())),
    ];
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), columns)?;

    write_batches(path, &[batch], &schema)?;
    debug!(
        path = %path.display(),
        source = %signature.source(),
        n_hours = signature.len(),
        "signature written"
    );
    Ok(())
}

/// Reads an anomaly signature from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Parquet`] if the file
/// cannot be read, [`IoError::Validation`] if the columns, the source
/// interval metadata, or the offset sequence are malformed, or
/// [`IoError::Signature`] if the deviations do not reconstruct a valid
/// signature (wrong count for the source interval, or non-finite values).
pub fn read_signature(path: &Path) -> Result<AnomalySignature, IoError> {
    let batches = read_batches(path)?;
    let Some(first) = batches.first() else {
        return Err(IoError::Validation {
            count: 1,
            details: "file contains no rows".to_string(),
        });
    };
    validate_columns(first, &SIGNATURE_COLUMNS)?;

    let metadata = first.schema().metadata().clone();
    let source = source_from_metadata(&metadata)?;

    let mut deviations = Vec::new();
    for batch in &batches {
        let offset_col = batch.column(0).as_primitive::<UInt32Type>();
        let deviation_col = batch.column(1).as_primitive::<Float64Type>();

        for i in 0..batch.num_rows() {
            let offset = offset_col.value(i);
            if offset as usize != deviations.len() {
                return Err(IoError::Validation {
                    count: 1,
                    details: format!(
                        "row {}: expected offset {}, got {offset}",
                        deviations.len(),
                        deviations.len()
                    ),
                });
            }
            deviations.push(deviation_col.value(i));
        }
    }

    let signature =
        AnomalySignature::from_deviations(source, deviations).map_err(|e| IoError::Signature {
            reason: e.to_string(),
        })?;
    debug!(path = %path.display(), n_hours = signature.len(), "signature read");
    Ok(signature)
}

fn source_from_metadata(metadata: &HashMap<String, String>) -> Result<Interval, IoError> {
    let missing = |key: &str| IoError::Validation {
        count: 1,
        details: format!("missing '{key}' in file metadata"),
    };
    let start = parse_date(metadata.get(SOURCE_START_KEY).ok_or_else(|| {
        missing(SOURCE_START_KEY)
    })?)?;
    let end = parse_date(metadata.get(SOURCE_END_KEY).ok_or_else(|| missing(SOURCE_END_KEY))?)?;

    Interval::new(start, end).map_err(|e| IoError::Validation {
        count: 1,
        details: e.to_string(),
    })
}
