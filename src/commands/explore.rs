//! The exploration run: locate candidates, probe, analyze, report.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::style::{dim, header, value};
use crate::{Cli, analysis, discovery, probing, report};

pub fn run(cli: &Cli) -> Result<()> {
    println!("{}", header("datascout: looking for tabular data"));

    let files = discovery::list_data_files(&cli.data_dir)?;
    if files.is_empty() {
        print_setup_hints(&cli.data_dir);
        return Ok(());
    }

    // candidates are probed in listed order; the first file any decoder
    // accepts is the one analyzed, and the run stops there
    for path in &files {
        let Some((dataset, format)) = probing::probe_file(path) else {
            continue;
        };

        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        let dataset_analysis = analysis::analyze(&dataset);
        let mut out = io::stdout();
        analysis::render(&dataset, &dataset_analysis, format, &mut out)?;
        out.flush()?;

        let analysis_report =
            report::AnalysisReport::build(&dataset, &dataset_analysis, &file_name, format)?;
        report::write_all(&cli.output_dir, &dataset, &dataset_analysis, &analysis_report)?;

        print_next_steps();
        return Ok(());
    }

    print_probe_failure_hints();
    Ok(())
}

fn print_setup_hints(data_dir: &Path) {
    println!("\n{}", header("nothing to inspect, suggestions:"));
    println!("  1. check that the data file finished downloading");
    println!(
        "  2. create the directory: {}",
        value(format!("mkdir -p {}", data_dir.display()))
    );
    println!("  3. move the file into it");
    println!("  4. run datascout again");
}

fn print_next_steps() {
    println!("\n{}", header("next steps:"));
    println!(
        "  1. read {} for the dataset structure",
        value(report::MARKDOWN_REPORT_FILE)
    );
    println!(
        "  2. open {} to eyeball the actual rows",
        value(report::SAMPLE_FILE)
    );
    println!("  3. pick the text columns worth a closer look");
}

fn print_probe_failure_hints() {
    println!("\n{}", header("no file could be decoded, possible causes:"));
    println!("  1. the file is corrupt: download it again");
    println!("  2. the file uses a format datascout does not know: confirm the format with whoever produced it");
    println!(
        "  {}",
        dim("(formats tried: parquet, csv, excel, and parquet.gzip for *.gzip files)")
    );
}
