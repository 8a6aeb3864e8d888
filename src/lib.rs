//! # inkmap-base
//!
//! Structural indexer for Ink interactive-fiction sources: knots, stitches,
//! labels, includes and diverts, plus the cross-file queries an editor needs
//! to complete and navigate divert targets.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Editor features (completion, goto-def, outline, change events)
//!   ↓
//! project   → Workspace enumeration and bulk loading
//!   ↓
//! semantic  → FileIndex, include scope, divert-target resolution
//!   ↓
//! syntax    → NodeMap arena and borrowed node views
//!   ↓
//! parser    → Line patterns and the block state machine
//!   ↓
//! base      → Primitives (LineRange, path normalization, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → semantic → project → ide)
// ============================================================================

/// Foundation types: LineRange, path normalization
pub mod base;

/// Parser: line classification and block splitting
pub mod parser;

/// Syntax: the per-file node map
pub mod syntax;

/// Semantic: file index and cross-file resolution
pub mod semantic;

/// Project management: workspace loading
pub mod project;

/// IDE features: completion, goto-definition, outline
pub mod ide;

pub mod error;

pub use base::{LineRange, normalize_path};
pub use error::{InkError, Result};
pub use ide::{Analysis, AnalysisHost};
pub use semantic::{DivertTarget, FileIndex, Resolver, TargetKind};
pub use syntax::NodeMap;
