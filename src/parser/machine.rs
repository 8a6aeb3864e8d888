//! Block boundary state machine.
//!
//! Both structural levels (knots within a file, stitches within a knot) are
//! split the same way: walk the lines once, and every header line closes the
//! block in progress and opens a new one. The levels differ only in how a
//! header on the final line is treated, captured by [`TrailingHeader`].
//!
//! ```text
//!                 body line
//!               ┌──────────┐
//!               ▼          │
//!   start ──► Accumulating ┘ ── header line ──► emit [start, i), reopen at i
//!               │
//!               └── final line ──► emit, Flushed (input ignored from here)
//! ```

use super::patterns::Header;

/// What to do with a header found on the final line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingHeader {
    /// Open the new block but never emit it.
    Discard,
    /// Emit the header as a one-line block.
    Emit,
}

/// A closed block: a half-open range of line indices relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// `None` for the leading block before the first header.
    pub name: Option<&'a str>,
    pub start: usize,
    pub end: usize,
    pub is_function: bool,
    /// Set on the block closed by the end of the input.
    pub is_last: bool,
}

#[derive(Debug, Clone, Copy)]
struct Pending<'a> {
    name: Option<&'a str>,
    start: usize,
    is_function: bool,
}

impl<'a> Pending<'a> {
    fn leading() -> Self {
        Self {
            name: None,
            start: 0,
            is_function: false,
        }
    }

    fn opened_by(header: Header<'a>, start: usize) -> Self {
        Self {
            name: Some(header.name),
            start,
            is_function: header.is_function,
        }
    }

    fn close(self, end: usize, is_last: bool) -> Block<'a> {
        Block {
            name: self.name,
            start: self.start,
            end,
            is_function: self.is_function,
            is_last,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    Accumulating(Pending<'a>),
    Flushed,
}

/// Splits a sequence of classified lines into blocks.
#[derive(Debug)]
pub struct BlockMachine<'a> {
    state: State<'a>,
    line_count: usize,
    trailing: TrailingHeader,
    last_flag: bool,
    emitted: Vec<Block<'a>>,
}

impl<'a> BlockMachine<'a> {
    /// Create a machine for `line_count` lines.
    ///
    /// `last_flag` is copied onto whichever block the end of input closes.
    pub fn new(line_count: usize, trailing: TrailingHeader, last_flag: bool) -> Self {
        Self {
            state: State::Accumulating(Pending::leading()),
            line_count,
            trailing,
            last_flag,
            emitted: Vec::new(),
        }
    }

    /// Feed the line at `index`, already classified as a header or not.
    pub fn feed(&mut self, index: usize, header: Option<Header<'a>>) {
        let State::Accumulating(pending) = self.state else {
            return;
        };
        let is_final = index + 1 >= self.line_count;

        match header {
            Some(header) => {
                self.emitted.push(pending.close(index, false));
                if !is_final {
                    self.state = State::Accumulating(Pending::opened_by(header, index));
                    return;
                }
                if self.trailing == TrailingHeader::Emit {
                    let trailing = Pending::opened_by(header, index);
                    self.emitted.push(trailing.close(index + 1, self.last_flag));
                }
                self.state = State::Flushed;
            }
            None if is_final => {
                self.emitted.push(pending.close(index + 1, self.last_flag));
                self.state = State::Flushed;
            }
            None => {}
        }
    }

    /// Consume the machine, returning the emitted blocks in order.
    ///
    /// A machine that never reached its final line (zero lines of input)
    /// closes the pending block at `line_count`.
    pub fn finish(mut self) -> Vec<Block<'a>> {
        if let State::Accumulating(pending) = self.state {
            self.emitted
                .push(pending.close(self.line_count, self.last_flag));
        }
        self.emitted
    }
}

/// Run a [`BlockMachine`] over `lines`, classifying each with `classify`.
pub fn split_blocks<'a>(
    lines: &[&'a str],
    trailing: TrailingHeader,
    last_flag: bool,
    classify: impl Fn(&'a str) -> Option<Header<'a>>,
) -> Vec<Block<'a>> {
    let mut machine = BlockMachine::new(lines.len(), trailing, last_flag);
    for (index, &line) in lines.iter().enumerate() {
        machine.feed(index, classify(line));
    }
    machine.finish()
}
