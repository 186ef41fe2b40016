//! Report serialization: the JSON document, the Markdown document, and the
//! CSV sample extract.

pub mod markdown;
pub mod sample;

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::analysis::DatasetAnalysis;
use crate::dataset::Dataset;
use crate::probing::DetectedFormat;
use crate::style::{label, value};

pub const JSON_REPORT_FILE: &str = "data_analysis_report.json";
pub const MARKDOWN_REPORT_FILE: &str = "data_analysis_report.md";
pub const SAMPLE_FILE: &str = "pesticide_data_sample.csv";

/// At most this many textual columns get sample values in the JSON report.
const MAX_SAMPLED_TEXT_COLUMNS: usize = 5;
/// Sample values recorded per textual column.
const REPORT_SAMPLES: usize = 3;

#[derive(Debug, Serialize)]
pub struct DataShape {
    pub rows: usize,
    pub columns: usize,
}

/// Everything the reports record about the decoded dataset.
///
/// Maps keep the dataset's column order (serde_json's `preserve_order`).
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub file_name: String,
    pub file_format: String,
    pub data_shape: DataShape,
    pub columns: Vec<String>,
    pub dtypes: Map<String, Value>,
    pub text_columns: Vec<String>,
    pub sample_data: Map<String, Value>,
}

impl AnalysisReport {
    /// Assemble the report once, after analysis. Sample values are stored
    /// untruncated; the writers decide their own display limits.
    pub fn build(
        dataset: &Dataset,
        analysis: &DatasetAnalysis,
        file_name: &str,
        format: DetectedFormat,
    ) -> Result<Self> {
        let mut dtypes = Map::new();
        for col in &analysis.columns {
            dtypes.insert(col.name.clone(), json!(col.kind));
        }

        let mut sample_data = Map::new();
        for name in analysis.text_columns.iter().take(MAX_SAMPLED_TEXT_COLUMNS) {
            let idx = dataset.schema().index_of(name)?;
            let samples = dataset.string_samples(idx, REPORT_SAMPLES)?;
            sample_data.insert(name.clone(), json!(samples));
        }

        Ok(Self {
            file_name: file_name.to_string(),
            file_format: format.tag().to_string(),
            data_shape: DataShape {
                rows: dataset.num_rows(),
                columns: dataset.num_columns(),
            },
            columns: analysis.columns.iter().map(|c| c.name.clone()).collect(),
            dtypes,
            text_columns: analysis.text_columns.clone(),
            sample_data,
        })
    }
}

/// Write all three outputs, overwriting unconditionally.
///
/// I/O failures here are not caught anywhere below `main`: a report that
/// cannot be written aborts the run.
pub fn write_all(
    output_dir: &Path,
    dataset: &Dataset,
    analysis: &DatasetAnalysis,
    report: &AnalysisReport,
) -> Result<()> {
    let json_path = output_dir.join(JSON_REPORT_FILE);
    fs::write(&json_path, serde_json::to_string_pretty(report)? + "\n")?;

    let markdown_path = output_dir.join(MARKDOWN_REPORT_FILE);
    markdown::write_markdown(&markdown_path, dataset, analysis, report)?;

    let sample_path = output_dir.join(SAMPLE_FILE);
    sample::write_sample(&sample_path, dataset)?;

    println!("\n{}", label("reports written:"));
    println!("  - {} (machine-readable)", value(json_path.display()));
    println!("  - {} (human-readable)", value(markdown_path.display()));
    println!(
        "  - {} (first {} rows)",
        value(sample_path.display()),
        sample::SAMPLE_ROWS
    );

    Ok(())
}
