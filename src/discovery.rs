//! Message file discovery

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List regular files in `dir` whose name ends with `suffix`.
///
/// Subdirectories are never entered or returned. Order follows the
/// underlying directory listing.
pub fn discover_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        if !matches_suffix(&entry.file_name().to_string_lossy(), suffix) {
            continue;
        }
        if !path.is_file() {
            debug!("Ignoring non-file entry {}", path.display());
            continue;
        }
        files.push(path);
    }

    Ok(files)
}

#[allow(clippy::case_sensitive_file_extension_comparisons)]
fn matches_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}
