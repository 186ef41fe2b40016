//! Format probing: try each decoder in priority order until one accepts the file.

pub mod csv;
pub mod excel;
pub mod parquet;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::style::{dim, header, value};

/// The decoder that accepted a candidate file.
///
/// The tag strings are part of the report contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedFormat {
    Parquet,
    Csv,
    Excel,
    #[serde(rename = "parquet.gzip")]
    ParquetGzip,
}

impl DetectedFormat {
    pub fn tag(&self) -> &'static str {
        match self {
            DetectedFormat::Parquet => "parquet",
            DetectedFormat::Csv => "csv",
            DetectedFormat::Excel => "excel",
            DetectedFormat::ParquetGzip => "parquet.gzip",
        }
    }
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

type Decoder = fn(&Path) -> Result<Dataset>;

/// The fixed probe sequence for one candidate file.
///
/// The lenient Parquet re-read only joins the sequence when the file name
/// carries a `.gzip` suffix, mirroring how such exports are usually named.
fn probe_sequence(path: &Path) -> Vec<(DetectedFormat, Decoder)> {
    let mut attempts: Vec<(DetectedFormat, Decoder)> = vec![
        (DetectedFormat::Parquet, parquet::read_parquet),
        (DetectedFormat::Csv, csv::read_csv),
        (DetectedFormat::Excel, excel::read_excel),
    ];

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gzip"))
    {
        attempts.push((DetectedFormat::ParquetGzip, parquet::read_parquet_lenient));
    }

    attempts
}

/// Try to decode one candidate file, printing one status line per attempt.
///
/// Returns the first successfully decoded dataset and its format tag, or
/// `None` when every decoder rejects the file. Decoder failures are routine
/// here and never propagate.
pub fn probe_file(path: &Path) -> Option<(Dataset, DetectedFormat)> {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    println!("\nprobing {}", header(&name));

    for (format, decode) in probe_sequence(path) {
        match decode(path) {
            Ok(dataset) => {
                println!("  decoded as {}", value(format.tag()));
                return Some((dataset, format));
            }
            Err(err) => {
                println!("  {}", dim(format!("not {}: {}", format.tag(), err)));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::sync::Arc;

    use arrow::array::{Int32Array, RecordBatch, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use ::parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    fn write_parquet(path: &Path) {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("name", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            Arc::clone(&schema),
            vec![
                Arc::new(Int32Array::from(vec![1, 2, 3])),
                Arc::new(StringArray::from(vec!["a", "b", "c"])),
            ],
        )
        .unwrap();
        let file = File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(DetectedFormat::Parquet.tag(), "parquet");
        assert_eq!(DetectedFormat::Csv.tag(), "csv");
        assert_eq!(DetectedFormat::Excel.tag(), "excel");
        assert_eq!(DetectedFormat::ParquetGzip.tag(), "parquet.gzip");
    }

    #[test]
    fn test_format_serializes_to_tag() {
        let json = serde_json::to_string(&DetectedFormat::ParquetGzip).unwrap();
        assert_eq!(json, "\"parquet.gzip\"");
    }

    #[test]
    fn test_probe_selects_parquet_first() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mystery");
        write_parquet(&path);

        let (dataset, format) = probe_file(&path).unwrap();
        assert_eq!(format, DetectedFormat::Parquet);
        assert_eq!(dataset.num_rows(), 3);
    }

    #[test]
    fn test_probe_falls_through_to_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mystery");
        std::fs::write(&path, "id,name\n1,a\n2,b\n").unwrap();

        let (dataset, format) = probe_file(&path).unwrap();
        assert_eq!(format, DetectedFormat::Csv);
        assert_eq!(dataset.num_rows(), 2);
        assert_eq!(dataset.num_columns(), 2);
    }

    #[test]
    fn test_probe_rejects_undecodable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mystery.bin");
        std::fs::write(&path, [0xff_u8; 64]).unwrap();

        assert!(probe_file(&path).is_none());
    }

    #[test]
    fn test_gzip_suffix_extends_probe_sequence() {
        let plain = probe_sequence(Path::new("data/export.parquet"));
        assert_eq!(plain.len(), 3);

        let suffixed = probe_sequence(Path::new("data/export.parquet.gzip"));
        assert_eq!(suffixed.len(), 4);
        assert_eq!(suffixed[3].0, DetectedFormat::ParquetGzip);
    }

    #[test]
    fn test_gzip_named_parquet_still_wins_priority() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.parquet.gzip");
        write_parquet(&path);

        // a readable parquet file is claimed by the first attempt even when
        // the lenient re-read is also in the sequence
        let (_, format) = probe_file(&path).unwrap();
        assert_eq!(format, DetectedFormat::Parquet);
    }
}
