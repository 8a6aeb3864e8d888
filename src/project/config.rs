//! Loader options

use globset::{Glob, GlobMatcher};

use crate::base::constants::DEFAULT_FILE_PATTERN;
use crate::error::{InkError, Result};

/// Options for enumerating and loading workspace files
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Glob matched against paths relative to the workspace root
    pub pattern: String,
    /// Read and parse files on the rayon pool during bulk loads
    pub parallel: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FILE_PATTERN.to_string(),
            parallel: true,
        }
    }
}

impl LoaderConfig {
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Compile the configured pattern
    pub fn matcher(&self) -> Result<GlobMatcher> {
        Glob::new(&self.pattern)
            .map(|glob| glob.compile_matcher())
            .map_err(|source| InkError::InvalidPattern {
                pattern: self.pattern.clone(),
                source,
            })
    }
}
