//! Low-level Parquet batch reading and writing shared by the series and
//! signature codecs.

use std::path::Path;
use std::sync::Arc;

use arrow::array::RecordBatch;
use arrow::datatypes::Schema;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> =
        reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parquet {
                reason: e.to_string(),
            })?;

    Ok(batches)
}

/// Writes a sequence of record batches to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let props = WriterProperties::default();
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}

/// Validates a batch's column names against the expected layout,
/// accumulating every mismatch before failing.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing each wrong column count or name.
pub(crate) fn validate_columns(batch: &RecordBatch, expected: &[&str]) -> Result<(), IoError> {
    let num_cols = batch.num_columns();
    if num_cols != expected.len() {
        return Err(IoError::Validation {
            count: 1,
            details: format!("expected {} columns, got {num_cols}", expected.len()),
        });
    }

    let schema = batch.schema();
    let mut mismatches: Vec<String> = Vec::new();
    for (i, expected_name) in expected.iter().enumerate() {
        let actual_name = schema.field(i).name();
        if actual_name != *expected_name {
            mismatches.push(format!(
                "column {i}: expected '{expected_name}', got '{actual_name}'"
            ));
        }
    }

    if !mismatches.is_empty() {
        return Err(IoError::Validation {
            count: mismatches.len(),
            details: mismatches.join("; "),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use arrow::array::{ArrayRef, Float64Array, UInt16Array};
    use arrow::datatypes::{DataType, Field};

    use super::*;

    fn two_column_batch(names: [&str; 2]) -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new(names[0], DataType::UInt16, false),
            Field::new(names[1], DataType::Float64, false),
        ]);
        let columns: Vec<ArrayRef> = vec![
            Arc::new(UInt16Array::from(vec![1u16, 2])),
            Arc::new(Float64Array::from(vec![0.5, 1.5])),
        ];
        RecordBatch::try_new(Arc::new(schema), columns).unwrap()
    }

    #[test]
    fn read_batches_file_not_found() {
        let err = read_batches(Path::new("/nonexistent/series.parquet")).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn validate_columns_accepts_matching_names() {
        let batch = two_column_batch(["day_of_year", "value"]);
        validate_columns(&batch, &["day_of_year", "value"]).unwrap();
    }

    #[test]
    fn validate_columns_reports_each_mismatch() {
        let batch = two_column_batch(["doy", "val"]);
        match validate_columns(&batch, &["day_of_year", "value"]).unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("'day_of_year', got 'doy'"));
                assert!(details.contains("'value', got 'val'"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn validate_columns_rejects_wrong_count() {
        let batch = two_column_batch(["day_of_year", "value"]);
        match validate_columns(&batch, &["day_of_year"]).unwrap_err() {
            IoError::Validation { details, .. } => {
                assert!(details.contains("expected 1 columns, got 2"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn write_then_read_round_trips_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.parquet");
        let batch = two_column_batch(["day_of_year", "value"]);

        write_batches(&path, std::slice::from_ref(&batch), &batch.schema()).unwrap();
        let back = read_batches(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0], batch);
    }
}
