use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::domain::AnnotatedRecord;
use crate::parsing::csv_parser::records_to_dataframe;

/// Temporary sibling of `path`, in the same directory so the final rename
/// stays on one filesystem.
fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Output path has no file name: {}", path.display()))?;
    Ok(path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id())))
}

/// Write through `write` into a temporary file, then rename it over `path`.
///
/// On any failure the temporary file is removed and `path` is left as it was.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp = temp_sibling(path)?;
    let result = (|| -> Result<()> {
        let file = File::create(&tmp)
            .with_context(|| format!("Failed to create {}", tmp.display()))?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()?;
        writer
            .get_ref()
            .sync_all()
            .with_context(|| format!("Failed to sync {}", tmp.display()))?;
        Ok(())
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e)
            .with_context(|| format!("Failed to move output into place at {}", path.display()));
    }
    Ok(())
}

/// Write a DataFrame as CSV with a header row, atomically.
pub fn write_dataframe_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    write_atomic(path, |writer| {
        CsvWriter::new(writer)
            .include_header(true)
            .finish(df)
            .context("Failed to serialise DataFrame as CSV")
    })
}

/// Write the annotated catalog as CSV in output column order, atomically.
pub fn write_annotated_csv(path: &Path, records: &[AnnotatedRecord]) -> Result<()> {
    let mut df = records_to_dataframe(records)?;
    write_dataframe_csv(path, &mut df)
        .with_context(|| format!("Failed to write annotated catalog to {}", path.display()))
}

/// Write any serialisable value as pretty JSON, atomically.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, value).context("Failed to serialise JSON")?;
        writer.write_all(b"\n")?;
        Ok(())
    })
}
