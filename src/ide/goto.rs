//! Go-to-definition implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::text_utils::extract_word_at_cursor;
use crate::semantic::{DivertTarget, FileIndex, Resolver, TargetKind};

/// Result of a go-to-definition request.
#[derive(Clone, Debug)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The file containing the target.
    pub file: PathBuf,
    /// Line of the definition (0-indexed).
    pub line: u32,
    pub name: Arc<str>,
    pub kind: TargetKind,
}

impl GotoTarget {
    fn from_target(target: DivertTarget, name: &str) -> Self {
        Self {
            file: target.file,
            line: target.line,
            name: Arc::from(name),
            kind: target.kind,
        }
    }
}

/// Find the definition of the name under the cursor.
///
/// # Arguments
/// * `index` - The file index to search
/// * `path` - The file containing the cursor
/// * `line` - Cursor line (0-indexed)
/// * `col` - Cursor column (0-indexed, in characters)
/// * `line_text` - Full text of the cursor line
pub fn goto_definition(
    index: &FileIndex,
    path: &Path,
    line: u32,
    col: u32,
    line_text: &str,
) -> GotoResult {
    let Some(word) = extract_word_at_cursor(line_text, col as usize) else {
        return GotoResult::empty();
    };

    match Resolver::new(index).resolve_definition(&word, path, line) {
        Ok(target) => GotoResult::single(GotoTarget::from_target(target, &word)),
        Err(err) => {
            debug!("[GOTO] {err}");
            GotoResult::empty()
        }
    }
}
