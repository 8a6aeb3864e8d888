//! File enumeration and single-file loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::LoaderConfig;
use crate::base::normalize_path;
use crate::error::{InkError, Result};
use crate::syntax::NodeMap;

/// Collect every file under `root` matching the configured pattern.
///
/// Paths are normalized (they become index keys) and sorted for
/// deterministic load order. Unreadable subdirectories are skipped with a
/// warning; only a failure on `root` itself is an error.
pub fn collect_file_paths(root: &Path, config: &LoaderConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(InkError::DirectoryNotFound(root.to_path_buf()));
    }
    let matcher = config.matcher()?;

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!("skipping unreadable workspace entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            paths.push(normalize_path(entry.path()));
        }
    }

    paths.sort();
    Ok(paths)
}

/// Read a file as UTF-8 text.
///
/// Invalid byte sequences are replaced with U+FFFD rather than failing, so a
/// stray Latin-1 byte in prose or a comment does not drop the file from the
/// index. Only I/O failures are errors.
pub fn load_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| InkError::io(path, err))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Read and parse a file into a fresh [`NodeMap`].
pub fn load_and_parse(path: &Path) -> Result<NodeMap> {
    let text = load_file(path)?;
    Ok(NodeMap::parse(path, &text))
}
