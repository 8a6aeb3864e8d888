//! Domain constants shared across the indexer.

/// Default workspace enumeration pattern.
pub const DEFAULT_FILE_PATTERN: &str = "**/*.ink";

/// Divert targets that are always valid without a declaration.
pub const ALWAYS_VALID_TARGETS: [&str; 3] = ["END", "DONE", "->"];

/// Check whether a divert target name needs no declaration.
pub fn is_always_valid_target(name: &str) -> bool {
    ALWAYS_VALID_TARGETS.contains(&name)
}
