//! Path-keyed store of parsed files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::syntax::NodeMap;

/// Maps each file path to its current [`NodeMap`].
///
/// Records are replaced wholesale, never merged. Each one is built outside
/// the index and installed by a single [`FileIndex::put`], so readers never
/// see a half-built record.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    records: FxHashMap<PathBuf, Arc<NodeMap>>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `record` under its own path, returning the record it replaced.
    pub fn put(&mut self, record: NodeMap) -> Option<Arc<NodeMap>> {
        let path = record.path().to_path_buf();
        self.records.insert(path, Arc::new(record))
    }

    /// The current record for `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&Arc<NodeMap>> {
        self.records.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.records.contains_key(path)
    }

    /// Drop the record for `path`. Change events never call this.
    pub fn remove(&mut self, path: &Path) -> Option<Arc<NodeMap>> {
        self.records.remove(path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over indexed paths in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.records.keys()
    }
}
