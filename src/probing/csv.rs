//! Delimited-text decoding attempt.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;

use crate::dataset::Dataset;

/// How many records schema inference may look at before committing to types.
const INFER_MAX_RECORDS: usize = 1000;

/// Decode the file as CSV with a header row, inferring column types.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let mut file = File::open(path)?;

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, Some(INFER_MAX_RECORDS))?;
    if schema.fields().is_empty() {
        bail!("no columns found");
    }
    file.rewind()?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_format(format)
        .build(file)?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::new(schema, batches))
}
