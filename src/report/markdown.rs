//! The human-readable report document.

use std::fs;
use std::path::Path;

use anyhow::Result;
use num_format::{Locale, ToFormattedString};

use crate::analysis::{DatasetAnalysis, truncate_chars};
use crate::dataset::Dataset;

use super::AnalysisReport;

/// Sample values shown per textual column.
const SAMPLES_PER_COLUMN: usize = 2;
/// Longest sample text before truncation.
const SAMPLE_CHARS: usize = 200;

/// Write the Markdown report, overwriting any previous one.
pub fn write_markdown(
    path: &Path,
    dataset: &Dataset,
    analysis: &DatasetAnalysis,
    report: &AnalysisReport,
) -> Result<()> {
    fs::write(path, render(dataset, analysis, report)?)?;
    Ok(())
}

fn render(dataset: &Dataset, analysis: &DatasetAnalysis, report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Data Analysis Report\n\n");

    md.push_str("## File\n");
    md.push_str(&format!("- Name: `{}`\n", report.file_name));
    md.push_str(&format!("- Format: {}\n", report.file_format));
    md.push_str(&format!(
        "- Shape: {} rows x {} columns\n\n",
        report.data_shape.rows.to_formatted_string(&Locale::en),
        report.data_shape.columns
    ));

    md.push_str("## Columns\n");
    md.push_str(&format!("{} columns in total:\n\n", analysis.columns.len()));
    for (i, col) in analysis.columns.iter().enumerate() {
        md.push_str(&format!(
            "{}. **{}** - type: `{}`, non-null: {}\n",
            i + 1,
            col.name,
            col.kind,
            col.non_null
        ));
    }

    md.push_str("\n## Text Columns\n");
    md.push_str(&format!(
        "{} text column(s) found:\n\n",
        analysis.text_columns.len()
    ));
    for name in &analysis.text_columns {
        md.push_str(&format!("### {name}\n"));
        let idx = dataset.schema().index_of(name)?;
        for (i, sample) in dataset
            .string_samples(idx, SAMPLES_PER_COLUMN)?
            .iter()
            .enumerate()
        {
            md.push_str(&format!(
                "Sample {}: `{}`\n\n",
                i + 1,
                truncate_chars(sample, SAMPLE_CHARS)
            ));
        }
    }

    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{Int32Array, RecordBatch, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use tempfile::TempDir;

    use crate::analysis::analyze;
    use crate::probing::DetectedFormat;

    fn sample_dataset() -> Dataset {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("notes", DataType::Utf8, true),
        ]));
        let long_note = "n".repeat(500);
        let batch = RecordBatch::try_new(
            Arc::clone(&schema),
            vec![
                Arc::new(Int32Array::from(vec![1, 2, 3])),
                Arc::new(StringArray::from(vec![
                    Some(long_note.as_str()),
                    Some("short"),
                    None,
                ])),
            ],
        )
        .unwrap();
        Dataset::new(schema, vec![batch])
    }

    #[test]
    fn test_markdown_sections_and_truncation() {
        let dataset = sample_dataset();
        let analysis = analyze(&dataset);
        let report =
            AnalysisReport::build(&dataset, &analysis, "field_notes.parquet", DetectedFormat::Parquet)
                .unwrap();

        let md = render(&dataset, &analysis, &report).unwrap();

        assert!(md.starts_with("# Data Analysis Report"));
        assert!(md.contains("- Name: `field_notes.parquet`"));
        assert!(md.contains("- Format: parquet"));
        assert!(md.contains("- Shape: 3 rows x 2 columns"));
        assert!(md.contains("**notes** - type: `Utf8`, non-null: 2"));
        assert!(md.contains("### notes"));
        // 500-char sample is cut to 200 chars plus the marker
        assert!(md.contains(&format!("`{}...`", "n".repeat(200))));
        assert!(!md.contains(&"n".repeat(201)));
        assert!(md.contains("Sample 2: `short`"));
    }

    #[test]
    fn test_write_markdown_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.md");
        let dataset = sample_dataset();
        let analysis = analyze(&dataset);
        let report =
            AnalysisReport::build(&dataset, &analysis, "x", DetectedFormat::Csv).unwrap();

        write_markdown(&path, &dataset, &analysis, &report).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("## Columns"));
    }
}
