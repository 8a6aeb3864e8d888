//! Borrowed views over arena nodes.
//!
//! A view pairs a node id with its [`NodeMap`] so that derived positions can
//! walk the ancestor chain.

use super::NodeMap;
use super::nodes::{Knot, KnotId, Label, LabelId, Stitch, StitchId};
use crate::base::LineRange;

/// A knot together with the map that owns it.
#[derive(Debug, Clone, Copy)]
pub struct KnotRef<'a> {
    pub(super) map: &'a NodeMap,
    pub(super) id: KnotId,
}

/// A stitch together with the map that owns it.
#[derive(Debug, Clone, Copy)]
pub struct StitchRef<'a> {
    pub(super) map: &'a NodeMap,
    pub(super) id: StitchId,
}

/// A label together with the map that owns it.
#[derive(Debug, Clone, Copy)]
pub struct LabelRef<'a> {
    pub(super) map: &'a NodeMap,
    pub(super) id: LabelId,
}

impl<'a> KnotRef<'a> {
    fn node(&self) -> &'a Knot {
        &self.map.knots[self.id.index()]
    }

    pub fn id(&self) -> KnotId {
        self.id
    }

    pub fn map(&self) -> &'a NodeMap {
        self.map
    }

    pub fn name(&self) -> Option<&'a str> {
        self.node().name.as_deref()
    }

    pub fn start_line(&self) -> u32 {
        self.node().start_line
    }

    pub fn end_line(&self) -> u32 {
        self.node().end_line
    }

    pub fn range(&self) -> LineRange {
        LineRange::new(self.start_line(), self.end_line())
    }

    pub fn is_function(&self) -> bool {
        self.node().is_function
    }

    pub fn is_last(&self) -> bool {
        self.node().is_last
    }

    pub fn stitches(&self) -> impl Iterator<Item = StitchRef<'a>> + 'a {
        let map = self.map;
        self.node()
            .stitches
            .iter()
            .map(move |&id| StitchRef { map, id })
    }

    /// The first stitch whose line range contains `line`.
    pub fn stitch_at(&self, line: u32) -> Option<StitchRef<'a>> {
        self.stitches().find(|stitch| stitch.range().contains(line))
    }
}

impl<'a> StitchRef<'a> {
    fn node(&self) -> &'a Stitch {
        &self.map.stitches[self.id.index()]
    }

    pub fn id(&self) -> StitchId {
        self.id
    }

    pub fn name(&self) -> Option<&'a str> {
        self.node().name.as_deref()
    }

    pub fn knot(&self) -> KnotRef<'a> {
        KnotRef {
            map: self.map,
            id: self.node().knot,
        }
    }

    pub fn relative_start(&self) -> u32 {
        self.node().relative_start
    }

    pub fn relative_end(&self) -> u32 {
        self.node().relative_end
    }

    pub fn is_last(&self) -> bool {
        self.node().is_last
    }

    pub fn start_line(&self) -> u32 {
        self.knot().start_line() + self.relative_start()
    }

    /// End line, extended by one on the final stitch of the file so the
    /// implicit end-of-file line is addressable.
    pub fn end_line(&self) -> u32 {
        self.knot().start_line() + self.relative_end() + u32::from(self.is_last())
    }

    pub fn range(&self) -> LineRange {
        LineRange::new(self.start_line(), self.end_line())
    }

    pub fn labels(&self) -> impl Iterator<Item = LabelRef<'a>> + 'a {
        let map = self.map;
        self.node()
            .labels
            .iter()
            .map(move |&id| LabelRef { map, id })
    }
}

impl<'a> LabelRef<'a> {
    fn node(&self) -> &'a Label {
        &self.map.labels[self.id.index()]
    }

    pub fn id(&self) -> LabelId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        self.node().name.as_str()
    }

    pub fn offset(&self) -> u32 {
        self.node().offset
    }

    pub fn stitch(&self) -> StitchRef<'a> {
        StitchRef {
            map: self.map,
            id: self.node().stitch,
        }
    }

    pub fn line(&self) -> u32 {
        self.stitch().start_line() + self.offset()
    }
}
