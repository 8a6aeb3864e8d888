//! The per-file structural map.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::nodes::{Knot, KnotId, Label, LabelId, Stitch, StitchId};
use super::views::{KnotRef, LabelRef, StitchRef};
use crate::parser::{Block, TrailingHeader, patterns, scan_declarations, split_blocks, split_lines};

/// Parsed structure of one Ink file: its knots, stitches and labels, plus
/// the includes and diverts it declares.
///
/// A map is built in one pass from the full text and never patched; an
/// edited file gets a fresh map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMap {
    path: PathBuf,
    pub(super) knots: Vec<Knot>,
    pub(super) stitches: Vec<Stitch>,
    pub(super) labels: Vec<Label>,
    includes: IndexSet<PathBuf>,
    diverts: IndexSet<SmolStr>,
    line_count: u32,
}

impl NodeMap {
    /// Parse `text` as the content of the file at `path`.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let path = path.into();
        let lines = split_lines(text);
        let declarations = scan_declarations(&path, &lines);

        let mut map = Self {
            path,
            knots: Vec::new(),
            stitches: Vec::new(),
            labels: Vec::new(),
            includes: declarations.includes,
            diverts: declarations.diverts,
            line_count: lines.len() as u32,
        };

        let knot_blocks = split_blocks(&lines, TrailingHeader::Discard, true, patterns::knot_header);
        for block in knot_blocks {
            map.push_knot(&lines[block.start..block.end], block);
        }
        map
    }

    fn push_knot(&mut self, lines: &[&str], block: Block<'_>) {
        let id = KnotId::new(self.knots.len());
        let stitch_blocks = split_blocks(
            lines,
            TrailingHeader::Emit,
            block.is_last,
            patterns::stitch_header,
        );

        let mut stitches = Vec::with_capacity(stitch_blocks.len());
        for stitch in stitch_blocks {
            stitches.push(self.push_stitch(id, &lines[stitch.start..stitch.end], stitch));
        }

        self.knots.push(Knot {
            name: block.name.map(SmolStr::new),
            start_line: block.start as u32,
            end_line: block.end as u32,
            is_function: block.is_function,
            is_last: block.is_last,
            stitches,
        });
    }

    fn push_stitch(&mut self, knot: KnotId, lines: &[&str], block: Block<'_>) -> StitchId {
        let id = StitchId::new(self.stitches.len());

        let mut labels = Vec::new();
        for (offset, line) in lines.iter().enumerate() {
            if let Some(name) = patterns::label(line) {
                labels.push(LabelId::new(self.labels.len()));
                self.labels.push(Label {
                    name: SmolStr::new(name),
                    stitch: id,
                    offset: offset as u32,
                });
            }
        }

        self.stitches.push(Stitch {
            name: block.name.map(SmolStr::new),
            knot,
            relative_start: block.start as u32,
            relative_end: block.end as u32,
            is_last: block.is_last,
            labels,
        });
        id
    }

    /// The file this map was parsed from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of `'\n'`-separated lines in the source text.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Knots in source order, preamble first.
    pub fn knots(&self) -> impl Iterator<Item = KnotRef<'_>> {
        (0..self.knots.len()).map(move |index| KnotRef {
            map: self,
            id: KnotId::new(index),
        })
    }

    /// Knots that have a declared name, in source order.
    pub fn named_knots(&self) -> impl Iterator<Item = KnotRef<'_>> {
        self.knots().filter(|knot| knot.name().is_some())
    }

    pub fn knot(&self, id: KnotId) -> Option<KnotRef<'_>> {
        (id.index() < self.knots.len()).then_some(KnotRef { map: self, id })
    }

    pub fn stitch(&self, id: StitchId) -> Option<StitchRef<'_>> {
        (id.index() < self.stitches.len()).then_some(StitchRef { map: self, id })
    }

    pub fn label(&self, id: LabelId) -> Option<LabelRef<'_>> {
        (id.index() < self.labels.len()).then_some(LabelRef { map: self, id })
    }

    /// The first knot whose line range contains `line`.
    pub fn knot_at(&self, line: u32) -> Option<KnotRef<'_>> {
        self.knots().find(|knot| knot.range().contains(line))
    }

    /// Included files, normalized relative to this file's directory.
    pub fn includes(&self) -> &IndexSet<PathBuf> {
        &self.includes
    }

    /// Divert target names referenced anywhere in the file.
    pub fn diverts(&self) -> &IndexSet<SmolStr> {
        &self.diverts
    }
}
