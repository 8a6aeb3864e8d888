//! Line classification tables.

use inkmap::parser::patterns::{divert, include, knot_header, label, stitch_header};
use rstest::rstest;

// ============================================================================
// Knot headers
// ============================================================================

#[rstest]
#[case("=== knot", "knot", false)]
#[case("== knot", "knot", false)]
#[case("  ===== spaced_out ===", "spaced_out", false)]
#[case("=== function add(a, b)", "add", true)]
#[case("==function glued", "glued", true)]
fn test_knot_header(#[case] line: &str, #[case] name: &str, #[case] is_function: bool) {
    let header = knot_header(line).unwrap_or_else(|| panic!("Failed to classify: {line}"));
    assert_eq!(header.name, name);
    assert_eq!(header.is_function, is_function);
}

#[rstest]
#[case("= stitch")]
#[case("text === knot")]
#[case("===")]
fn test_not_a_knot_header(#[case] line: &str) {
    assert!(knot_header(line).is_none(), "Should not be a knot: {line}");
}

// ============================================================================
// Stitch headers
// ============================================================================

#[rstest]
#[case("= stitch", Some("stitch"))]
#[case("   =inner", Some("inner"))]
#[case("=== knot", None)]
#[case("- gather", None)]
fn test_stitch_header(#[case] line: &str, #[case] expected: Option<&str>) {
    assert_eq!(stitch_header(line).map(|h| h.name), expected);
}

// ============================================================================
// Labels
// ============================================================================

#[rstest]
#[case("* (pick) Choice", Some("pick"))]
#[case("+ (sticky) Again", Some("sticky"))]
#[case("  - (gather) Then", Some("gather"))]
#[case("* Choice (not_a_label)", None)]
#[case("(bare)", None)]
fn test_label(#[case] line: &str, #[case] expected: Option<&str>) {
    assert_eq!(label(line), expected);
}

// ============================================================================
// Includes and diverts
// ============================================================================

#[rstest]
#[case("INCLUDE act1.ink", Some("act1.ink"))]
#[case("  INCLUDE   act_2.ink", Some("act_2.ink"))]
#[case("INCLUDE notes.txt", None)]
#[case("include act1.ink", None)]
fn test_include(#[case] line: &str, #[case] expected: Option<&str>) {
    assert_eq!(include(line), expected);
}

#[rstest]
#[case("-> target", Some("target"))]
#[case("text ->target", Some("target"))]
#[case("<- thread_a", Some("thread_a"))]
#[case("-> first -> second", Some("first"))]
#[case("->->", None)]
fn test_divert(#[case] line: &str, #[case] expected: Option<&str>) {
    assert_eq!(divert(line), expected);
}
