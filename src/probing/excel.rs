//! Spreadsheet decoding attempt.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use crate::dataset::Dataset;

/// Decode the file as an Excel workbook, reading the first worksheet.
///
/// The first row is taken as the header; column types are inferred from the
/// cells below it.
pub fn read_excel(path: &Path) -> Result<Dataset> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no worksheets"))??;
    range_to_dataset(&range)
}

/// Turn a worksheet cell range into a Dataset.
///
/// A column whose data cells are all numeric becomes `Float64`, all-boolean
/// becomes `Boolean`, anything else (including mixed content) becomes `Utf8`.
/// Empty cells are missing values.
pub fn range_to_dataset(range: &Range<Data>) -> Result<Dataset> {
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| anyhow!("worksheet is empty"))?;
    let data_rows: Vec<&[Data]> = rows.collect();

    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Data::Empty => format!("column_{}", idx + 1),
            other => {
                let name = other.to_string().trim().to_string();
                if name.is_empty() {
                    format!("column_{}", idx + 1)
                } else {
                    name
                }
            }
        })
        .collect();
    if names.is_empty() {
        bail!("worksheet has no columns");
    }

    let mut fields = Vec::with_capacity(names.len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(names.len());

    // rows narrower than the header are padded with missing cells
    let empty = Data::Empty;
    for (idx, name) in names.iter().enumerate() {
        let cells: Vec<&Data> = data_rows
            .iter()
            .map(|row| row.get(idx).unwrap_or(&empty))
            .collect();
        let (data_type, array) = column_from_cells(&cells);
        fields.push(Field::new(name, data_type, true));
        columns.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(Arc::clone(&schema), columns)?;
    Ok(Dataset::new(schema, vec![batch]))
}

fn column_from_cells(cells: &[&Data]) -> (DataType, ArrayRef) {
    let occupied: Vec<&Data> = cells
        .iter()
        .copied()
        .filter(|cell| !matches!(cell, Data::Empty))
        .collect();

    let all_numeric = !occupied.is_empty()
        && occupied
            .iter()
            .all(|cell| matches!(cell, Data::Int(_) | Data::Float(_)));
    if all_numeric {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Int(i) => Some(*i as f64),
                Data::Float(f) => Some(*f),
                _ => None,
            })
            .collect();
        return (DataType::Float64, Arc::new(Float64Array::from(values)));
    }

    let all_boolean =
        !occupied.is_empty() && occupied.iter().all(|cell| matches!(cell, Data::Bool(_)));
    if all_boolean {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Bool(b) => Some(*b),
                _ => None,
            })
            .collect();
        return (DataType::Boolean, Arc::new(BooleanArray::from(values)));
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|cell| match cell {
            Data::Empty => None,
            other => Some(other.to_string()),
        })
        .collect();
    (DataType::Utf8, Arc::new(StringArray::from(values)))
}
