//! File I/O helpers for dump files
//!
//! Writes are plain create-and-write: a failure part way leaves a partial
//! file behind and nothing is rolled back. Reads of a missing dump file are
//! tolerated and yield no lines.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{WalletError, WalletResult};

/// Read a dump file line by line, returning no lines if it doesn't exist
///
/// A missing file is logged as a data-integrity warning rather than failing.
pub fn read_dump_lines<P: AsRef<Path>>(path: P) -> WalletResult<Vec<String>> {
    let path = path.as_ref();

    if !path.exists() {
        warn!(
            path = %path.display(),
            "dump file is missing from the set, data integrity may be compromised"
        );
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| WalletError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| WalletError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Read a whole file into a string; the file must exist
pub fn read_required<P: AsRef<Path>>(path: P) -> WalletResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|e| WalletError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Create (or truncate) `path` and write every chunk produced by `records`
pub fn write_records<P, I>(path: P, records: I) -> WalletResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| WalletError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    for record in records {
        writer
            .write_all(record.as_ref().as_bytes())
            .map_err(|e| WalletError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    writer
        .flush()
        .map_err(|e| WalletError::Io(format!("Failed to flush {}: {}", path.display(), e)))
}

/// Make sure `dir` exists
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> WalletResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        WalletError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
    })
}
