use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::logos::LogoMap;

/// Exit status used when the output directory cannot be emptied.
pub const RESET_EXIT_CODE: u8 = 2;

/// Removing an entry of the output directory failed.
#[derive(Debug, thiserror::Error)]
#[error("Failed to delete {}. Reason: {source}", .path.display())]
pub struct ResetError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Make sure `dir` exists and is empty.
///
/// Files and symlinks are unlinked, subdirectories removed recursively.
/// Stops at the first entry that cannot be removed.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
        debug!("Created output directory {:?}", dir);
        return Ok(());
    }

    let entries = fs::read_dir(dir).with_context(|| format!("Failed to list {:?}", dir))?;
    let mut removed = 0usize;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        let path = entry.path();
        remove_entry(&entry, &path).map_err(|source| ResetError { path, source })?;
        removed += 1;
    }

    info!("Cleared {} entries from {:?}", removed, dir);
    Ok(())
}

fn remove_entry(entry: &fs::DirEntry, path: &Path) -> io::Result<()> {
    // DirEntry::file_type does not follow symlinks
    if entry.file_type()?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Write `logos` as `<dir>/<file_name>`, keys sorted, four-space indent.
/// Any existing file is overwritten.
pub fn write_logos(dir: &Path, file_name: &str, logos: &LogoMap) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let path = dir.join(file_name);
    fs::write(&path, to_json(logos)?).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Wrote {} logos to {:?}", logos.len(), path);
    Ok(path)
}

fn to_json(logos: &LogoMap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    logos.serialize(&mut ser)?;
    Ok(buf)
}
