//! Document outline.

use std::path::Path;
use std::sync::Arc;

use crate::syntax::NodeMap;

/// Kind of outline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Knot,
    Function,
}

/// A named knot in the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: Arc<str>,
    pub kind: SymbolKind,
    /// Header line (0-indexed).
    pub line: u32,
}

/// Named knots of an indexed record, in source order.
pub fn document_symbols(record: &NodeMap) -> Vec<SymbolInfo> {
    record
        .named_knots()
        .filter_map(|knot| {
            Some(SymbolInfo {
                name: Arc::from(knot.name()?),
                kind: if knot.is_function() {
                    SymbolKind::Function
                } else {
                    SymbolKind::Knot
                },
                line: knot.start_line(),
            })
        })
        .collect()
}

/// Outline of live document text. The text is parsed on its own and the
/// index is left untouched.
pub fn document_outline(path: &Path, text: &str) -> Vec<SymbolInfo> {
    document_symbols(&NodeMap::parse(path, text))
}
