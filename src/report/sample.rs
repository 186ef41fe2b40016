//! The CSV sample extract.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use arrow::array::RecordBatch;
use arrow::csv::WriterBuilder;

use crate::dataset::Dataset;

/// Data rows written to the sample extract.
pub const SAMPLE_ROWS: usize = 100;

/// Write the first `SAMPLE_ROWS` rows of the dataset as CSV, header included,
/// columns in source order. Overwrites any previous extract.
pub fn write_sample(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);

    let head = dataset.head(SAMPLE_ROWS);
    if head.is_empty() {
        // still emit the header row for a dataset with no rows
        writer.write(&RecordBatch::new_empty(dataset.schema().clone()))?;
    }
    for batch in &head {
        writer.write(batch)?;
    }

    Ok(())
}
