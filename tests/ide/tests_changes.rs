//! Change events and re-indexing.

use std::path::Path;

use inkmap::ide::ChangeEvent;
use rstest::rstest;

use crate::helpers::fixtures::{SCENARIO, host_with};

#[rstest]
#[case("hello", false)]
#[case("\n", true)]
#[case("*", true)]
#[case("+", true)]
#[case("(", true)]
#[case(")", true)]
#[case("-", true)]
#[case("=", true)]
fn test_structural_edit_detection(#[case] edit: &str, #[case] structural: bool) {
    let event = ChangeEvent::new("a.ink", SCENARIO).with_edit(edit);
    assert_eq!(event.is_structural(), structural, "edit: {edit:?}");
}

#[test]
fn test_new_knot_is_indexed_after_structural_edit() {
    let mut host = host_with(&[("a.ink", SCENARIO)]);
    let text = format!("{SCENARIO}=== knotC\n");
    let event = ChangeEvent::new("a.ink", text).with_edit("=== knotC\n");

    assert!(host.apply_change(&event));
    let target = host
        .analysis()
        .resolve_definition("knotC", Path::new("a.ink"), 0)
        .unwrap();
    assert_eq!(target.line, 5);
}

#[test]
fn test_prose_edit_keeps_previous_record() {
    let mut host = host_with(&[("a.ink", SCENARIO)]);
    let text = SCENARIO.replace("Some text", "Some longer text");
    let event = ChangeEvent::new("a.ink", text).with_edit("longer ");

    assert!(!host.apply_change(&event));
    let record = host.analysis().record(Path::new("a.ink")).unwrap();
    assert_eq!(record.line_count(), 6);
}
