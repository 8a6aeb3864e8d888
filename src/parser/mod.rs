//! Line-oriented structural parser for Ink
//!
//! Ink structure is declared by line-leading markers, so the parser never
//! tokenizes below the line level:
//!
//! ```text
//! Source Text
//!     ↓
//! split on '\n' → lines
//!     ↓
//! patterns → each line classified (knot header, stitch header, label, ...)
//!     ↓
//! BlockMachine (knot level) → knot spans
//!     ↓
//! BlockMachine (stitch level, per knot) → stitch spans
//!     ↓
//! syntax::NodeMap → arena of knots / stitches / labels
//! ```
//!
//! Includes and diverts are collected by a separate flat scan
//! ([`scan_declarations`]) that ignores the hierarchy.

mod declarations;
mod machine;
pub mod patterns;

pub use declarations::{Declarations, scan_declarations};
pub use machine::{Block, BlockMachine, TrailingHeader, split_blocks};
pub use patterns::Header;

/// Split source text into lines on `'\n'`.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and
/// empty text yields one empty line, so every cursor line has an index.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
