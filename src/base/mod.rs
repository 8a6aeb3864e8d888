//! Foundation types for the inkmap toolchain.
//!
//! This module provides fundamental types used throughout the indexer:
//! - [`LineRange`] - Line-based node extents
//! - Domain constants (file pattern, always-valid divert targets)
//! - Lexical path normalization for include resolution
//!
//! This module has NO dependencies on other inkmap modules.

pub mod constants;
mod paths;
mod position;

pub use paths::{normalize_path, resolve_include};
pub use position::LineRange;
