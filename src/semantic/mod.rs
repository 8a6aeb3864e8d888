//! # Semantic Analysis
//!
//! Cross-file queries over parsed Ink files: the path-keyed [`FileIndex`],
//! include-scope closure, and divert-target resolution.
//!
//! ```text
//! (file, line) ──► scope_of ──► set of files
//!                                   │ joined with FileIndex
//!                                   ▼
//!                         knots + declared diverts
//!                                   │ narrowed to enclosing knot/stitch
//!                                   ▼
//!                         stitches + labels at the line
//! ```

mod file_index;
mod resolver;
mod scope;

pub use file_index::FileIndex;
pub use resolver::{DivertTarget, Resolver, TargetKind};
pub use scope::{IncludeScope, scope_of};
