//! IDE feature tests
//!
//! Tests for:
//! - Code completion
//! - Go to definition
//! - Document outline
//! - Change coalescing

pub mod tests_changes;
pub mod tests_goto;
pub mod tests_symbols;
