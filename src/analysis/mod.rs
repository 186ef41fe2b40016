//! Schema and content analysis of a decoded dataset.

use std::io::Write;

use anyhow::Result;
use arrow::util::pretty::pretty_format_batches;
use num_format::{Locale, ToFormattedString};
use tabled::Tabled;

use crate::dataset::Dataset;
use crate::probing::DetectedFormat;
use crate::style::{dim, header, label, rounded_table, value};

/// How many rows the console preview shows.
const PREVIEW_ROWS: usize = 3;
/// How many sample values are shown per textual column.
const CONSOLE_SAMPLES: usize = 2;
/// Longest sample shown on the console before truncation.
const CONSOLE_SAMPLE_CHARS: usize = 100;

/// Derived metadata for one column. Never mutated after analysis.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub name: String,
    pub kind: String,
    pub non_null: usize,
}

/// The full analysis of a dataset: every column described, textual columns
/// singled out.
#[derive(Debug)]
pub struct DatasetAnalysis {
    pub columns: Vec<ColumnDescriptor>,
    pub text_columns: Vec<String>,
}

/// Describe every column and collect the textual subset, in schema order.
pub fn analyze(dataset: &Dataset) -> DatasetAnalysis {
    let columns = dataset
        .schema()
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| ColumnDescriptor {
            name: field.name().clone(),
            kind: field.data_type().to_string(),
            non_null: dataset.non_null_count(idx),
        })
        .collect();

    DatasetAnalysis {
        columns,
        text_columns: dataset.text_column_names(),
    }
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let truncated: String = s.chars().take(max).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Non-null")]
    non_null: String,
}

/// Render the analysis for inspection on the console.
pub fn render(
    dataset: &Dataset,
    analysis: &DatasetAnalysis,
    format: DetectedFormat,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "\n{}", header("Dataset analysis"))?;
    writeln!(out)?;
    writeln!(out, "{:<8} {}", label("Format:"), value(format.tag()))?;
    writeln!(
        out,
        "{:<8} {} rows x {} columns",
        label("Shape:"),
        value(dataset.num_rows().to_formatted_string(&Locale::en)),
        value(dataset.num_columns())
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "{} ({}):",
        header("Columns"),
        value(analysis.columns.len())
    )?;
    let rows: Vec<ColumnRow> = analysis
        .columns
        .iter()
        .map(|col| ColumnRow {
            name: col.name.clone(),
            kind: col.kind.clone(),
            non_null: format!("{}/{}", col.non_null, dataset.num_rows()),
        })
        .collect();
    writeln!(out, "{}", rounded_table(rows))?;

    writeln!(out, "\n{}:", header(format!("First {PREVIEW_ROWS} rows")))?;
    if dataset.num_rows() == 0 {
        writeln!(out, "  {}", dim("(no rows)"))?;
    } else {
        writeln!(out, "{}", pretty_format_batches(&dataset.head(PREVIEW_ROWS))?)?;
    }

    writeln!(
        out,
        "\n{} ({}):",
        header("Text columns"),
        value(analysis.text_columns.len())
    )?;
    for name in &analysis.text_columns {
        let idx = dataset.schema().index_of(name)?;
        let samples = dataset.string_samples(idx, CONSOLE_SAMPLES)?;
        writeln!(out, "  {}", header(name))?;
        if samples.is_empty() {
            writeln!(out, "    {}", dim("(no non-missing values)"))?;
        }
        for (i, sample) in samples.iter().enumerate() {
            writeln!(
                out,
                "    {} {}",
                label(format!("sample {}:", i + 1)),
                truncate_chars(sample, CONSOLE_SAMPLE_CHARS)
            )?;
        }
    }

    Ok(())
}
