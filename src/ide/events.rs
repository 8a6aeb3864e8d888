//! Document change notifications.

use std::path::PathBuf;

use crate::parser::patterns::is_structural_edit;

/// Text inserted or replaced by one edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentChange {
    pub text: String,
}

impl ContentChange {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A document change: the full text after the change plus the edits that
/// produced it.
#[derive(Clone, Debug)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub text: String,
    pub edits: Vec<ContentChange>,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            edits: Vec::new(),
        }
    }

    pub fn with_edit(mut self, text: impl Into<String>) -> Self {
        self.edits.push(ContentChange::new(text));
        self
    }

    /// Whether any edit could have changed knots, stitches or labels.
    pub fn is_structural(&self) -> bool {
        self.edits.iter().any(|edit| is_structural_edit(&edit.text))
    }
}
