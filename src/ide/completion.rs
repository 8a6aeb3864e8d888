//! Completion suggestions implementation.

use std::path::Path;
use std::sync::Arc;

use crate::base::constants::ALWAYS_VALID_TARGETS;
use crate::parser::patterns;
use crate::semantic::{DivertTarget, FileIndex, Resolver, TargetKind};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Knot,
    Function,
    Stitch,
    Label,
    Keyword,
    /// A referenced name with no definition yet.
    Reference,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Knot => 9,       // Module
            CompletionKind::Function => 3,   // Function
            CompletionKind::Stitch => 7,     // Class
            CompletionKind::Label => 5,      // Field
            CompletionKind::Keyword => 14,   // Keyword
            CompletionKind::Reference => 18, // Reference
        }
    }
}

impl From<TargetKind> for CompletionKind {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Knot => CompletionKind::Knot,
            TargetKind::Function => CompletionKind::Function,
            TargetKind::Stitch => CompletionKind::Stitch,
            TargetKind::Label => CompletionKind::Label,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Create from a named divert target. Preamble targets have no name and
    /// yield `None`.
    pub fn from_target(target: &DivertTarget) -> Option<Self> {
        let name = target.name()?;
        let file = target
            .file
            .file_name()
            .map(|file_name| file_name.to_string_lossy())
            .unwrap_or_default();
        let priority = match target.kind {
            TargetKind::Label => 10,
            TargetKind::Stitch => 20,
            TargetKind::Knot | TargetKind::Function => 30,
        };
        Some(
            Self::new(name, target.kind.into())
                .with_detail(format!("{file}:{}", target.line + 1))
                .with_priority(priority),
        )
    }
}

/// What the text before the cursor is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionContext {
    /// Right after `->` or `<-`.
    DivertTarget,
    /// Inside a knot header being typed.
    KnotHeader,
    None,
}

/// Classify the text before the cursor.
pub fn completion_context(line_prefix: &str) -> CompletionContext {
    if patterns::is_divert_context(line_prefix) {
        CompletionContext::DivertTarget
    } else if patterns::is_knot_header_context(line_prefix) {
        CompletionContext::KnotHeader
    } else {
        CompletionContext::None
    }
}

/// Get completion suggestions at a position.
///
/// # Arguments
/// * `index` - The file index to search
/// * `path` - The file containing the cursor
/// * `line` - Cursor line (0-indexed)
/// * `line_prefix` - Text of the cursor line up to the cursor
///
/// # Returns
/// After a divert arrow: every named target in scope, then `END`, `DONE`
/// and `->`. In a knot header: names referenced by diverts that nothing
/// defines yet. Otherwise nothing.
pub fn completions(
    index: &FileIndex,
    path: &Path,
    line: u32,
    line_prefix: &str,
) -> Vec<CompletionItem> {
    let resolver = Resolver::new(index);

    match completion_context(line_prefix) {
        CompletionContext::DivertTarget => {
            let mut items: Vec<CompletionItem> = resolver
                .targets_in_scope(path, line)
                .iter()
                .filter_map(CompletionItem::from_target)
                .collect();
            items.extend(ALWAYS_VALID_TARGETS.iter().map(|keyword| {
                CompletionItem::new(*keyword, CompletionKind::Keyword).with_priority(90)
            }));
            items
        }
        CompletionContext::KnotHeader => resolver
            .unresolved_diverts_in_scope(path, line)
            .into_iter()
            .map(|name| {
                CompletionItem::new(name.as_str(), CompletionKind::Reference)
                    .with_detail("referenced, not defined")
            })
            .collect(),
        CompletionContext::None => Vec::new(),
    }
}
