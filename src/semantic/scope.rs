//! Include-scope closure.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::trace;

use super::FileIndex;

/// Files visible from a starting file, in depth-first discovery order.
pub type IncludeScope = IndexSet<PathBuf>;

/// Compute the transitive closure of `path` over `INCLUDE` directives.
///
/// Only indexed files are members: a path without a record (the start file
/// included) contributes nothing and is not expanded. Each file appears once
/// regardless of include cycles.
pub fn scope_of(index: &FileIndex, path: &Path) -> IncludeScope {
    let mut scope = IncludeScope::new();
    let mut stack = vec![path.to_path_buf()];

    while let Some(current) = stack.pop() {
        if scope.contains(&current) {
            continue;
        }
        let Some(record) = index.get(&current) else {
            trace!("[SCOPE] no record for {}, skipping", current.display());
            continue;
        };
        // Push in reverse so the first include is expanded first.
        for include in record.includes().iter().rev() {
            if !scope.contains(include) {
                stack.push(include.clone());
            }
        }
        scope.insert(current);
    }

    scope
}
