//! Divert-target resolution.
//!
//! Answers "what can a divert on this line jump to?" by joining the include
//! scope of a file against the [`FileIndex`] and narrowing to the knot and
//! stitch that enclose the line.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::{FileIndex, IncludeScope, scope_of};
use crate::base::constants::is_always_valid_target;
use crate::error::{InkError, Result};
use crate::syntax::{KnotRef, LabelRef, StitchRef};

/// What kind of node a divert target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Knot,
    Function,
    Stitch,
    Label,
}

/// A named location a divert can jump to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DivertTarget {
    /// `None` for preamble knots and stitches.
    pub name: Option<SmolStr>,
    pub kind: TargetKind,
    /// The file that defines the target.
    pub file: PathBuf,
    /// Line of the target's first line in `file` (0-indexed).
    pub line: u32,
}

impl DivertTarget {
    fn from_knot(knot: KnotRef<'_>) -> Self {
        Self {
            name: knot.name().map(SmolStr::new),
            kind: if knot.is_function() {
                TargetKind::Function
            } else {
                TargetKind::Knot
            },
            file: knot.map().path().to_path_buf(),
            line: knot.start_line(),
        }
    }

    fn from_stitch(stitch: StitchRef<'_>) -> Self {
        Self {
            name: stitch.name().map(SmolStr::new),
            kind: TargetKind::Stitch,
            file: stitch.knot().map().path().to_path_buf(),
            line: stitch.start_line(),
        }
    }

    fn from_label(label: LabelRef<'_>) -> Self {
        Self {
            name: Some(SmolStr::new(label.name())),
            kind: TargetKind::Label,
            file: label.stitch().knot().map().path().to_path_buf(),
            line: label.line(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Resolver provides divert-target queries over a [`FileIndex`].
///
/// Nothing is cached: every query recomputes the include scope, so a
/// replaced record is visible to the very next query.
pub struct Resolver<'a> {
    index: &'a FileIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a FileIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a FileIndex {
        self.index
    }

    /// Files reachable from `path` through includes.
    pub fn scope_of(&self, path: &Path) -> IncludeScope {
        scope_of(self.index, path)
    }

    /// The stitch enclosing `line` in `path`, if the file is indexed and the
    /// line falls inside one.
    pub fn enclosing_stitch(&self, path: &Path, line: u32) -> Option<StitchRef<'a>> {
        let record = self.index.get(path)?;
        let Some(knot) = record.knot_at(line) else {
            warn!("[RESOLVE] can't identify knot for line {line} in {}", path.display());
            return None;
        };
        let stitch = knot.stitch_at(line);
        if stitch.is_none() {
            warn!("[RESOLVE] can't identify stitch for line {line} in {}", path.display());
        }
        stitch
    }

    /// All targets visible from `line` of `path`: every knot in the include
    /// scope, then the stitches of the enclosing knot and the labels of the
    /// enclosing stitch.
    pub fn targets_in_scope(&self, path: &Path, line: u32) -> Vec<DivertTarget> {
        if !self.index.contains(path) {
            debug!("[RESOLVE] node map missing for file {}", path.display());
            return Vec::new();
        }

        let mut targets: Vec<DivertTarget> = self
            .scope_of(path)
            .iter()
            .filter_map(|file| self.index.get(file))
            .flat_map(|record| record.knots().map(DivertTarget::from_knot))
            .collect();

        match self.enclosing_stitch(path, line) {
            Some(stitch) => {
                targets.extend(stitch.knot().stitches().map(DivertTarget::from_stitch));
                targets.extend(stitch.labels().map(DivertTarget::from_label));
            }
            None => warn!("[RESOLVE] couldn't find current stitch for line {line}"),
        }

        targets
    }

    /// Every divert target name referenced anywhere in the include scope.
    pub fn declared_diverts_in_scope(&self, path: &Path, line: u32) -> IndexSet<SmolStr> {
        if !self.index.contains(path) {
            debug!("[RESOLVE] node map missing for file {}", path.display());
            return IndexSet::new();
        }
        trace!("[RESOLVE] collecting diverts for {}:{line}", path.display());

        self.scope_of(path)
            .iter()
            .filter_map(|file| self.index.get(file))
            .flat_map(|record| record.diverts().iter().cloned())
            .collect()
    }

    /// Referenced divert names with no visible definition, excluding the
    /// always-valid `END`, `DONE` and `->`.
    pub fn unresolved_diverts_in_scope(&self, path: &Path, line: u32) -> Vec<SmolStr> {
        let defined: IndexSet<SmolStr> = self
            .targets_in_scope(path, line)
            .into_iter()
            .filter_map(|target| target.name)
            .collect();

        self.declared_diverts_in_scope(path, line)
            .into_iter()
            .filter(|divert| !defined.contains(divert))
            .filter(|divert| !is_always_valid_target(divert))
            .collect()
    }

    /// The first visible target called `name`.
    ///
    /// Name collisions are not diagnosed; the first target in scope order
    /// wins.
    pub fn resolve_definition(&self, name: &str, path: &Path, line: u32) -> Result<DivertTarget> {
        self.targets_in_scope(path, line)
            .into_iter()
            .find(|target| target.name() == Some(name))
            .ok_or_else(|| InkError::DefinitionNotFound {
                name: name.to_string(),
                path: path.to_path_buf(),
                line,
            })
    }
}
