//! Locates candidate data files in the scanned directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use humansize::{BINARY, FormatSizeOptions, format_size};

use crate::style::{dim, header, value};

/// List the regular files directly under `data_dir`, sorted by name.
///
/// A missing directory is not an error: it is reported on the console and an
/// empty list is returned, which the caller treats as "no input". Entries that
/// are not regular files are skipped.
pub fn list_data_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        println!(
            "data directory {} does not exist",
            header(data_dir.display())
        );
        println!(
            "{}",
            dim("place the files to inspect inside it and run again")
        );
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    // read_dir order is platform-dependent; sort so probing order is stable
    files.sort();

    println!(
        "found {} file(s) in {}:",
        value(files.len()),
        header(data_dir.display())
    );
    for path in &files {
        let size = fs::metadata(path)?.len();
        println!(
            "  - {} {}",
            path.file_name().unwrap_or_default().to_string_lossy(),
            dim(format!(
                "({})",
                format_size(size, FormatSizeOptions::from(BINARY).decimal_places(1))
            ))
        );
    }

    Ok(files)
}
