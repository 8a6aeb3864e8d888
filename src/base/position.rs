//! Position tracking for structural nodes
//!
//! Ink structure is line oriented, so node extents are whole-line ranges.
//! Columns only matter at the editor boundary (cursor positions).

/// A half-open range of lines `[start, end)` (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check if a line falls within this range. `end` is never inside.
    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line < self.end
    }

    /// Number of lines covered by the range.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
