//! AnalysisHost and Analysis: state ownership for IDE features.
//!
//! The `AnalysisHost` owns the [`FileIndex`] and is its only writer.
//! `Analysis` borrows it immutably, so every query in one snapshot sees the
//! same set of records.
//!
//! ## Usage
//!
//! ```
//! use std::path::Path;
//! use inkmap::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("story.ink", "=== start\n-> finish\n=== finish\n");
//!
//! let analysis = host.analysis();
//! let target = analysis
//!     .resolve_definition("finish", Path::new("story.ink"), 1)
//!     .unwrap();
//! assert_eq!(target.line, 2);
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::normalize_path;
use crate::error::Result;
use crate::semantic::{DivertTarget, FileIndex, IncludeScope, Resolver};
use crate::syntax::NodeMap;

use super::{
    ChangeEvent, CompletionItem, GotoResult, SymbolInfo, completions, document_symbols,
    goto_definition,
};

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()`, `apply_change()` and
/// `remove_file()`, then get a consistent snapshot via `analysis()`.
#[derive(Debug)]
pub struct AnalysisHost {
    index: FileIndex,
    /// Skip re-parsing for edits that cannot change structure.
    coalesce_edits: bool,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    pub fn new() -> Self {
        Self {
            index: FileIndex::new(),
            coalesce_edits: true,
        }
    }

    /// Parse `text` and replace the record for `path`.
    pub fn set_file_content(&mut self, path: impl AsRef<Path>, text: &str) {
        let path = normalize_path(path.as_ref());
        self.set_file(NodeMap::parse(path, text));
    }

    /// Install a pre-parsed record, replacing any previous one.
    pub fn set_file(&mut self, record: NodeMap) {
        trace!("indexing {}", record.path().display());
        self.index.put(record);
    }

    pub fn remove_file(&mut self, path: &Path) -> bool {
        self.index.remove(&normalize_path(path)).is_some()
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.index.contains(&normalize_path(path))
    }

    pub fn file_count(&self) -> usize {
        self.index.len()
    }

    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.index.paths()
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    pub fn coalesce_edits(&self) -> bool {
        self.coalesce_edits
    }

    pub fn set_coalesce_edits(&mut self, coalesce: bool) {
        self.coalesce_edits = coalesce;
    }

    /// Apply a document change, re-parsing the whole file when needed.
    ///
    /// Returns `true` if the record was replaced. With coalescing on, an
    /// event whose edits contain no structural character is dropped as long
    /// as the file is already indexed.
    pub fn apply_change(&mut self, event: &ChangeEvent) -> bool {
        let path = normalize_path(&event.path);
        if self.coalesce_edits && self.index.contains(&path) && !event.is_structural() {
            debug!("skipping non-structural edit to {}", path.display());
            return false;
        }
        self.set_file(NodeMap::parse(path, &event.text));
        true
    }

    /// Get a consistent snapshot for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { index: &self.index }
    }
}

/// A read-only view over the index for one batch of queries.
///
/// Query paths are normalized the same way the host normalizes the paths it
/// stores, so `./a.ink` and `a.ink` name the same record.
#[derive(Clone, Copy)]
pub struct Analysis<'a> {
    index: &'a FileIndex,
}

impl<'a> Analysis<'a> {
    pub fn index(&self) -> &'a FileIndex {
        self.index
    }

    pub fn record(&self, path: &Path) -> Option<&'a NodeMap> {
        self.index.get(&normalize_path(path)).map(|record| record.as_ref())
    }

    fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.index)
    }

    pub fn scope_of(&self, path: &Path) -> IncludeScope {
        self.resolver().scope_of(&normalize_path(path))
    }

    pub fn targets_in_scope(&self, path: &Path, line: u32) -> Vec<DivertTarget> {
        self.resolver().targets_in_scope(&normalize_path(path), line)
    }

    pub fn declared_diverts_in_scope(&self, path: &Path, line: u32) -> IndexSet<SmolStr> {
        self.resolver()
            .declared_diverts_in_scope(&normalize_path(path), line)
    }

    pub fn unresolved_diverts_in_scope(&self, path: &Path, line: u32) -> Vec<SmolStr> {
        self.resolver()
            .unresolved_diverts_in_scope(&normalize_path(path), line)
    }

    pub fn resolve_definition(&self, name: &str, path: &Path, line: u32) -> Result<DivertTarget> {
        self.resolver()
            .resolve_definition(name, &normalize_path(path), line)
    }

    pub fn completions(&self, path: &Path, line: u32, line_prefix: &str) -> Vec<CompletionItem> {
        completions(self.index, &normalize_path(path), line, line_prefix)
    }

    pub fn goto_definition(&self, path: &Path, line: u32, col: u32, line_text: &str) -> GotoResult {
        goto_definition(self.index, &normalize_path(path), line, col, line_text)
    }

    /// Outline of an indexed file; empty when the file is not indexed.
    pub fn document_symbols(&self, path: &Path) -> Vec<SymbolInfo> {
        self.record(path).map(document_symbols).unwrap_or_default()
    }
}
