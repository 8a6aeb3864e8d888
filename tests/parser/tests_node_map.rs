//! Knot, stitch and label structure of parsed files.

use inkmap::LineRange;
use inkmap::syntax::NodeMap;

use crate::helpers::fixtures::SCENARIO;

// =============================================================================
// KNOTS
// =============================================================================

#[test]
fn test_scenario_has_two_named_knots() {
    let map = NodeMap::parse("a.ink", SCENARIO);
    let names: Vec<_> = map.named_knots().filter_map(|k| k.name()).collect();
    assert_eq!(names, vec!["knotA", "knotB"]);
    assert_eq!(map.line_count(), 6);
}

#[test]
fn test_text_before_first_knot_is_preamble() {
    let map = NodeMap::parse("a.ink", "Once upon a time\n-> start\n=== start\nHello\n");
    let preamble = map.knots().next().unwrap();
    assert_eq!(preamble.name(), None);
    assert_eq!(preamble.range(), LineRange::new(0, 2));
}

#[test]
fn test_knot_header_on_last_line_is_dropped() {
    let map = NodeMap::parse("a.ink", "=== first\ntext\n=== dangling");
    let names: Vec<_> = map.knots().map(|k| k.name()).collect();
    assert_eq!(names, vec![None, Some("first")]);

    let first = map.knots().last().unwrap();
    assert_eq!(first.end_line(), 2);
    assert!(!first.is_last());
}

#[test]
fn test_function_flag_on_final_knot() {
    let map = NodeMap::parse("a.ink", "=== start\n-> END\n=== function helper\n~ return 1\n");
    let last = map.knots().last().unwrap();
    assert_eq!(last.name(), Some("helper"));
    assert!(last.is_function());
    assert!(last.is_last());
}

// =============================================================================
// STITCHES
// =============================================================================

#[test]
fn test_every_knot_has_a_preamble_stitch() {
    let map = NodeMap::parse("a.ink", SCENARIO);
    for knot in map.knots() {
        let first = knot.stitches().next().expect("knot without stitches");
        assert_eq!(first.name(), None);
        assert_eq!(first.start_line(), knot.start_line());
    }
}

#[test]
fn test_stitch_lines_are_knot_relative() {
    let map = NodeMap::parse("a.ink", "Intro\n=== knot\n= one\ntext\n= two\ntext\n=== other\n");
    let knot = map.knots().nth(1).unwrap();
    for stitch in knot.stitches() {
        assert_eq!(stitch.start_line(), knot.start_line() + stitch.relative_start());
    }
    let starts: Vec<_> = knot.stitches().map(|s| (s.name(), s.start_line())).collect();
    assert_eq!(starts, vec![(None, 1), (Some("one"), 2), (Some("two"), 4)]);
}

#[test]
fn test_stitch_header_on_last_line_is_kept() {
    let map = NodeMap::parse("a.ink", "=== knot\ntext\n= tail");
    let stitch = map.knots().last().unwrap().stitches().last().unwrap();
    assert_eq!(stitch.name(), Some("tail"));
    assert_eq!(stitch.start_line(), 2);
}

// =============================================================================
// LABELS
// =============================================================================

#[test]
fn test_labels_belong_to_their_stitch() {
    let map = NodeMap::parse("a.ink", SCENARIO);
    let knot_a = map.named_knots().next().unwrap();
    let stitches: Vec<_> = knot_a.stitches().collect();
    assert_eq!(stitches[0].labels().count(), 0);

    let labels: Vec<_> = stitches[1].labels().map(|l| (l.name(), l.line())).collect();
    assert_eq!(labels, vec![("labelX", 3)]);
}

#[test]
fn test_includes_and_diverts_are_deduplicated() {
    let map = NodeMap::parse(
        "story/main.ink",
        "INCLUDE act1.ink\nINCLUDE act1.ink\n-> act1\n-> act1\n<- side\n",
    );
    let includes: Vec<_> = map.includes().iter().collect();
    assert_eq!(includes, vec![std::path::Path::new("story/act1.ink")]);
    let diverts: Vec<_> = map.diverts().iter().map(|d| d.as_str()).collect();
    assert_eq!(diverts, vec!["act1", "side"]);
}

#[test]
fn test_label_line_chains_knot_and_stitch_offsets() {
    let map = NodeMap::parse(
        "a.ink",
        "=== k1\ntext\nmore\n=== k2\nintro\n= st\nline\n- (lab) gather\n",
    );
    let k2 = map.named_knots().nth(1).unwrap();
    assert_eq!(k2.start_line(), 3);

    let st = k2.stitches().nth(1).unwrap();
    assert_eq!(st.name(), Some("st"));
    assert_eq!(st.relative_start(), 2);
    assert_eq!(st.start_line(), 5);

    let label = st.labels().next().unwrap();
    assert_eq!(label.offset(), 2);
    assert_eq!((label.name(), label.line()), ("lab", 7));
}
