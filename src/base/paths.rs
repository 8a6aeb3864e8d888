//! Path normalization utilities for consistent file index keys.
//!
//! Include directives name a sibling file (`INCLUDE other.ink`). The resolved
//! path must compare equal to the key the workspace loader used for that file,
//! so both sides go through [`normalize_path`].

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding normal component. The file system is never consulted.
///
/// # Examples
///
/// ```
/// use inkmap::base::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("story/./act1/../main.ink")), PathBuf::from("story/main.ink"));
/// assert_eq!(normalize_path(Path::new("./main.ink")), PathBuf::from("main.ink"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Resolve an included file name relative to the directory of the including file.
pub fn resolve_include(including_file: &Path, file_name: &str) -> PathBuf {
    let dir = including_file.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&dir.join(file_name))
}
