//! File boundary: CSV records in, JSON word lists in, JSON artifacts out.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::errors::{LabelError, Result};
use crate::types::WordLists;

/// Read a CSV file with a header row into one string per data row.
///
/// Each row's fields are joined with a single space. Rows that are blank
/// after trimming are skipped. Rows may have more or fewer fields than the
/// header.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LabelError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row.map_err(|source| LabelError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let joined = row.iter().collect::<Vec<_>>().join(" ");
        if joined.trim().is_empty() {
            skipped += 1;
            continue;
        }
        records.push(joined);
    }

    debug!(
        "Read CSV - path={}, records={}, blank_skipped={}",
        path.display(),
        records.len(),
        skipped
    );
    Ok(records)
}

/// Read a JSON array of strings.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LabelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = serde_json::from_str(&raw).map_err(|source| LabelError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read word list - path={}, words={}", path.display(), words.len());
    Ok(words)
}

/// Load the ignored and priority word lists.
pub fn load_word_lists(
    ignored_path: impl AsRef<Path>,
    priority_path: impl AsRef<Path>,
) -> Result<WordLists> {
    let ignored = read_word_list(ignored_path)?;
    let priority = read_word_list(priority_path)?;
    Ok(WordLists::new(ignored, priority))
}

/// Write `value` as pretty-printed JSON (two-space indent).
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| LabelError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
        if source.is_io() {
            write_err(io::Error::from(source))
        } else {
            LabelError::Serialize(source)
        }
    })?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
