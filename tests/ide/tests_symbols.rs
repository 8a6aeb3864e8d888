//! Document outline tests.

use std::path::Path;

use inkmap::ide::{SymbolKind, document_outline};

use crate::helpers::fixtures::{SCENARIO, host_with};

#[test]
fn test_outline_lists_named_knots_in_order() {
    let symbols = document_outline(Path::new("a.ink"), SCENARIO);
    let entries: Vec<_> = symbols.iter().map(|s| (s.name.as_ref(), s.line)).collect();
    assert_eq!(entries, vec![("knotA", 0), ("knotB", 4)]);
}

#[test]
fn test_outline_marks_functions() {
    let symbols = document_outline(
        Path::new("a.ink"),
        "=== story\n-> END\n=== function twice(x)\n~ return x * 2\n",
    );
    let kinds: Vec<_> = symbols.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SymbolKind::Knot, SymbolKind::Function]);
}

#[test]
fn test_outline_of_preamble_only_file_is_empty() {
    assert!(document_outline(Path::new("a.ink"), "Just prose.\n-> END\n").is_empty());
}

#[test]
fn test_outline_from_index_matches_live_text() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let indexed = host.analysis().document_symbols(Path::new("a.ink"));
    assert_eq!(indexed, document_outline(Path::new("a.ink"), SCENARIO));
}
