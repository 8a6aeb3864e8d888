use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{LoaderConfig, file_loader};
use crate::base::normalize_path;
use crate::error::{InkError, Result};
use crate::ide::AnalysisHost;
use crate::syntax::NodeMap;

/// Outcome of a bulk load.
///
/// A file that fails to load gets no record; the failure is kept here
/// instead of aborting the scan.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, InkError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Loads workspace files into an [`AnalysisHost`]
#[derive(Debug, Clone, Default)]
pub struct WorkspaceLoader {
    config: LoaderConfig,
}

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads every matching file under `root` into the host.
    ///
    /// Only enumeration failures are errors; per-file failures end up in
    /// the returned [`LoadReport`].
    pub fn load_directory_into_host(
        &self,
        root: impl AsRef<Path>,
        host: &mut AnalysisHost,
    ) -> Result<LoadReport> {
        let root = root.as_ref();
        let paths = file_loader::collect_file_paths(root, &self.config)?;
        info!("loading {} file(s) from {}", paths.len(), root.display());
        Ok(self.load_paths_into_host(paths, host))
    }

    /// Reads and parses `paths`, then installs the records one by one.
    ///
    /// Parsing runs on the rayon pool when `config.parallel` is set. The host
    /// is only touched from the calling thread.
    pub fn load_paths_into_host(&self, paths: Vec<PathBuf>, host: &mut AnalysisHost) -> LoadReport {
        let parse = |path: PathBuf| {
            let result = file_loader::load_and_parse(&path);
            (path, result)
        };
        let results: Vec<(PathBuf, Result<NodeMap>)> = if self.config.parallel {
            paths.into_par_iter().map(parse).collect()
        } else {
            paths.into_iter().map(parse).collect()
        };

        let mut report = LoadReport::default();
        for (path, result) in results {
            match result {
                Ok(record) => {
                    host.set_file(record);
                    report.loaded.push(path);
                }
                Err(err) => {
                    warn!("failed to load {}: {err}", path.display());
                    report.failed.push((path, err));
                }
            }
        }

        debug!(
            "loaded {} file(s), {} failure(s)",
            report.loaded.len(),
            report.failed.len()
        );
        report
    }

    /// Loads a single file into the host, replacing any previous record.
    pub fn load_file_into_host(&self, path: impl AsRef<Path>, host: &mut AnalysisHost) -> Result<()> {
        let path = normalize_path(path.as_ref());
        let record = file_loader::load_and_parse(&path)?;
        host.set_file(record);
        Ok(())
    }
}
