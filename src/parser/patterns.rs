//! Line classification patterns for Ink source text.
//!
//! Ink's structural markers are all line-leading, so classification is a
//! per-line regex match. The patterns are fixed: editor tooling and the
//! compiler agree on them, and positions computed here must line up with
//! what users see in other Ink tools.
//!
//! `\w` in these patterns is the ASCII word class.

use std::sync::LazyLock;

use regex::Regex;

fn compile_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex literal {pattern}: {err}"))
}

/// Two or more `=`, optional `function` keyword, then the knot name.
static KNOT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"^\s*===*?(\s*function)?\s*([0-9A-Za-z_]+)"));

/// Exactly one `=`, then the stitch name.
static STITCH_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"^\s*={1}\s*([0-9A-Za-z_]+)"));

/// A gather or choice bullet carrying a `(label)`.
static LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"^\s*[-\*\+]\s*\(([0-9A-Za-z_]+)\)"));

static INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"^\s*INCLUDE\s+([0-9A-Za-z_]+\.ink)"));

/// Divert or tunnel-return arrow followed by a target name.
static DIVERT: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(->|<-) ?([0-9A-Za-z_]+)"));

/// Characters whose insertion or removal can change the node structure.
static STRUCTURAL_EDIT: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"[\n\*\+\(\)-=]"));

/// Cursor right after a divert arrow.
static DIVERT_CONTEXT: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(->|<-) ?$"));

/// Cursor after a tunnel call `->->`, which takes no target.
static TUNNEL_CONTEXT: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"-> ?-> ?$"));

static KNOT_HEADER_CONTEXT: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"^\s*===*?"));

/// A block header (knot or stitch) found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub is_function: bool,
}

/// Match a knot header (`=== name`, `== function name`).
pub fn knot_header(line: &str) -> Option<Header<'_>> {
    let captures = KNOT_HEADER.captures(line)?;
    let name = captures.get(2)?.as_str();
    Some(Header {
        name,
        is_function: captures.get(1).is_some(),
    })
}

/// Match a stitch header (`= name`).
pub fn stitch_header(line: &str) -> Option<Header<'_>> {
    let captures = STITCH_HEADER.captures(line)?;
    Some(Header {
        name: captures.get(1)?.as_str(),
        is_function: false,
    })
}

/// Match a labelled gather or choice, returning the label name.
pub fn label(line: &str) -> Option<&str> {
    LABEL
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Match an `INCLUDE file.ink` directive, returning the file name.
pub fn include(line: &str) -> Option<&str> {
    INCLUDE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Return the target of the first divert on a line.
pub fn divert(line: &str) -> Option<&str> {
    DIVERT
        .captures(line)
        .and_then(|captures| captures.get(2))
        .map(|m| m.as_str())
}

/// Check whether inserted text could alter knots, stitches or labels.
pub fn is_structural_edit(text: &str) -> bool {
    STRUCTURAL_EDIT.is_match(text)
}

/// Check whether the text before a cursor ends in a divert arrow that
/// expects a target name.
pub fn is_divert_context(prefix: &str) -> bool {
    DIVERT_CONTEXT.is_match(prefix) && !TUNNEL_CONTEXT.is_match(prefix)
}

/// Check whether the text before a cursor opens a knot header.
pub fn is_knot_header_context(prefix: &str) -> bool {
    KNOT_HEADER_CONTEXT.is_match(prefix)
}
