//! Semantic tests
//!
//! Tests for:
//! - Include scope closure
//! - Divert-target resolution within and across files

pub mod tests_scenario;
