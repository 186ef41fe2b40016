//! Parquet decoding attempts.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use parquet::arrow::arrow_reader::{ArrowReaderOptions, ParquetRecordBatchReaderBuilder};

use crate::dataset::Dataset;

/// Decode the file as Parquet, materializing every record batch.
pub fn read_parquet(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    collect(builder)
}

/// Second-chance Parquet decode for files named with a compression suffix.
///
/// Ignores the Arrow schema embedded in the file metadata and rebuilds the
/// schema from the Parquet types alone, which rescues files whose embedded
/// metadata a stricter reader chokes on.
pub fn read_parquet_lenient(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let options = ArrowReaderOptions::new().with_skip_arrow_metadata(true);
    let builder = ParquetRecordBatchReaderBuilder::try_new_with_options(file, options)?;
    collect(builder)
}

fn collect(builder: ParquetRecordBatchReaderBuilder<File>) -> Result<Dataset> {
    let schema = builder.schema().clone();
    let reader = builder.build()?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(schema, batches))
}
