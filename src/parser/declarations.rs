//! Flat, per-line extraction of includes and divert references.
//!
//! Independent of the knot/stitch hierarchy: every line is checked on its own.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::patterns;
use crate::base::resolve_include;

/// Names a file declares outside its node structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    /// Included files, normalized against the including file's directory.
    pub includes: IndexSet<PathBuf>,
    /// Divert target names as written, first occurrence per line.
    pub diverts: IndexSet<SmolStr>,
}

/// Scan `lines` of the file at `path` for include directives and diverts.
pub fn scan_declarations(path: &Path, lines: &[&str]) -> Declarations {
    let mut declarations = Declarations::default();
    for line in lines {
        if let Some(file_name) = patterns::include(line) {
            declarations
                .includes
                .insert(resolve_include(path, file_name));
        }
        if let Some(target) = patterns::divert(line) {
            declarations.diverts.insert(SmolStr::new(target));
        }
    }
    declarations
}
