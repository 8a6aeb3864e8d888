//! Story fixtures and host builders.

#![allow(dead_code)]

use std::path::Path;

use inkmap::ide::AnalysisHost;
use inkmap::semantic::DivertTarget;

/// One knot with a stitch and a label, diverting to a second knot.
pub const SCENARIO: &str = "=== knotA\nSome text -> knotB\n= stitchOne\n* (labelX) more text\n=== knotB\n";

/// Creates an AnalysisHost holding the given `(path, text)` files.
pub fn host_with(files: &[(&str, &str)]) -> AnalysisHost {
    let mut host = AnalysisHost::new();
    for (path, text) in files {
        host.set_file_content(path, text);
        assert!(
            host.has_file(Path::new(path)),
            "'{path}' should be indexed after set_file_content"
        );
    }
    host
}

/// Names of the named targets, in order.
pub fn target_names(targets: &[DivertTarget]) -> Vec<&str> {
    targets.iter().filter_map(|t| t.name()).collect()
}
