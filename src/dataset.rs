//! In-memory tabular data decoded by one successful probe attempt.

use anyhow::Result;
use arrow::array::RecordBatch;
use arrow::datatypes::{DataType, SchemaRef};
use arrow::util::display::{ArrayFormatter, FormatOptions};

/// A decoded table: an Arrow schema plus the record batches read from disk.
///
/// Exactly one `Dataset` exists per run. It is produced by the first decoder
/// that accepts a candidate file and dropped when the process exits.
pub struct Dataset {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Dataset {
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self { schema, batches }
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    /// Count of non-missing values in the column at `col`.
    pub fn non_null_count(&self, col: usize) -> usize {
        self.batches
            .iter()
            .map(|batch| {
                let array = batch.column(col);
                array.len() - array.null_count()
            })
            .sum()
    }

    /// Whether a column type is textual (an unstructured string kind) rather
    /// than numeric or temporal.
    pub fn is_textual(data_type: &DataType) -> bool {
        matches!(
            data_type,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View
        )
    }

    /// Names of the textual columns, in schema order.
    pub fn text_column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .filter(|field| Self::is_textual(field.data_type()))
            .map(|field| field.name().clone())
            .collect()
    }

    /// Up to `limit` non-missing values from the column at `col`, rendered to
    /// strings in row order.
    pub fn string_samples(&self, col: usize, limit: usize) -> Result<Vec<String>> {
        let options = FormatOptions::default();
        let mut samples = Vec::new();

        for batch in &self.batches {
            let array = batch.column(col);
            let formatter = ArrayFormatter::try_new(array.as_ref(), &options)?;
            for row in 0..array.len() {
                if array.is_null(row) {
                    continue;
                }
                samples.push(formatter.value(row).to_string());
                if samples.len() == limit {
                    return Ok(samples);
                }
            }
        }

        Ok(samples)
    }

    /// The first `n` rows as zero-copy slices of the underlying batches.
    pub fn head(&self, n: usize) -> Vec<RecordBatch> {
        let mut remaining = n;
        let mut head = Vec::new();

        for batch in &self.batches {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(batch.num_rows());
            head.push(batch.slice(0, take));
            remaining -= take;
        }

        head
    }
}
