pub mod analysis;
pub mod commands;
pub mod dataset;
pub mod discovery;
pub mod probing;
pub mod report;
pub mod style;

use clap::{Parser, builder::ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory scanned for candidate data files.
    ///
    /// Every regular file in the directory is a candidate, regardless of
    /// extension. The directory is not searched recursively.
    #[arg(long, default_value = "data", value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,

    /// Directory the reports and the CSV sample are written into.
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub output_dir: PathBuf,
}
