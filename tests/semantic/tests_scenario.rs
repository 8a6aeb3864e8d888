//! Single-file resolution against the reference story.

use std::path::Path;

use inkmap::semantic::TargetKind;

use crate::helpers::fixtures::{SCENARIO, host_with, target_names};

#[test]
fn test_diverts_in_scope_include_referenced_knot() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let diverts = host
        .analysis()
        .declared_diverts_in_scope(Path::new("a.ink"), 2);
    assert!(diverts.contains("knotB"));
}

#[test]
fn test_targets_at_stitch_header() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let targets = host.analysis().targets_in_scope(Path::new("a.ink"), 2);
    assert_eq!(
        target_names(&targets),
        vec!["knotA", "knotB", "stitchOne", "labelX"]
    );

    let stitches: Vec<_> = targets
        .iter()
        .filter(|t| t.kind == TargetKind::Stitch)
        .collect();
    assert_eq!(stitches.len(), 2, "preamble stitch and stitchOne");
}

#[test]
fn test_resolve_knot_definition() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let target = host
        .analysis()
        .resolve_definition("knotB", Path::new("a.ink"), 2)
        .unwrap();
    assert_eq!(target.file, Path::new("a.ink"));
    assert_eq!(target.line, 4);
    assert_eq!(target.kind, TargetKind::Knot);
}

#[test]
fn test_labels_outside_current_stitch_are_hidden() {
    let host = host_with(&[("a.ink", SCENARIO)]);
    let targets = host.analysis().targets_in_scope(Path::new("a.ink"), 1);
    assert!(!target_names(&targets).contains(&"labelX"));
    assert!(target_names(&targets).contains(&"stitchOne"));
}

#[test]
fn test_always_valid_targets_are_never_unresolved() {
    let host = host_with(&[(
        "a.ink",
        "=== start\n-> END\n-> DONE\n-> missing\n-> start\n",
    )]);
    let unresolved = host
        .analysis()
        .unresolved_diverts_in_scope(Path::new("a.ink"), 1);
    assert_eq!(unresolved, vec!["missing"]);
}

#[test]
fn test_replaced_record_is_visible_immediately() {
    let mut host = host_with(&[("a.ink", SCENARIO)]);
    host.set_file_content("a.ink", "=== renamed\n");
    let analysis = host.analysis();
    let path = Path::new("a.ink");
    assert!(analysis.resolve_definition("knotB", path, 0).is_err());
    assert!(analysis.resolve_definition("renamed", path, 0).is_ok());
}
