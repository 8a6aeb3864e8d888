//! Go to definition tests for the IDE layer.

use std::path::Path;

use inkmap::semantic::TargetKind;

use crate::helpers::fixtures::{SCENARIO, host_with};

// =============================================================================
// GOTO DEFINITION - SAME FILE
// =============================================================================

#[test]
fn test_goto_knot_from_divert() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let line = "Some text -> knotB";

    // Cursor on "knotB" (col 14)
    let result = host.analysis().goto_definition(Path::new("a.ink"), 1, 14, line);

    assert!(!result.is_empty(), "Goto definition should find target");
    let target = &result.targets[0];
    assert_eq!(target.name.as_ref(), "knotB");
    assert_eq!(target.line, 4);
    assert_eq!(target.kind, TargetKind::Knot);
}

#[test]
fn test_goto_label_in_current_stitch() {
    let host = host_with(&[("a.ink", SCENARIO)]);

    // Cursor at the end of "labelX" on the label line itself
    let line = "* (labelX) more text";
    let result = host.analysis().goto_definition(Path::new("a.ink"), 3, 9, line);

    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].kind, TargetKind::Label);
    assert_eq!(result.targets[0].line, 3);
}

#[test]
fn test_goto_on_arrow_finds_nothing() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let result = host
        .analysis()
        .goto_definition(Path::new("a.ink"), 1, 10, "Some text -> knotB");
    assert!(result.is_empty());
}

// =============================================================================
// GOTO DEFINITION - CROSS FILE
// =============================================================================

#[test]
fn test_goto_into_included_file() {
    let host = host_with(&[
        ("main.ink", "INCLUDE chapter.ink\n-> chapter_start\n"),
        ("chapter.ink", "Chapter notes\n=== chapter_start\nIt begins.\n"),
    ]);
    let result = host
        .analysis()
        .goto_definition(Path::new("main.ink"), 1, 5, "-> chapter_start");

    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].file, Path::new("chapter.ink"));
    assert_eq!(result.targets[0].line, 1);
}
