use std::{collections::HashMap, path::PathBuf, sync::Arc};

use tracing::debug;

use crate::LoadError;

/// Read-only access to layer documents by source identifier, e.g.
/// "data/schulen.geojson".
pub trait DataSource: Send + Sync {
    fn get(&self, id: &str) -> Result<Arc<[u8]>, LoadError>;
    fn has(&self, id: &str) -> bool;
}

/// Identifiers are paths relative to `root`.
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, id: &str) -> PathBuf { self.root.join(id) }
}

impl DataSource for DiskSource {
    fn get(&self, id: &str) -> Result<Arc<[u8]>, LoadError> {
        let path = self.full(id);
        std::fs::read(&path)
            .map(Arc::from)
            .map_err(|e| {
                debug!(path = %path.display(), error = %e, "data source unreadable");
                LoadError::not_found(id)
            })
    }

    fn has(&self, id: &str) -> bool { self.full(id).is_file() }
}

/// Simple in-memory source, keyed by identifier.
#[derive(Default, Clone)]
pub struct MemSource {
    pub(crate) files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    pub fn insert(&mut self, id: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(id.into(), bytes.into());
    }

    /// Builder form of [`MemSource::insert`].
    pub fn with(mut self, id: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(id, bytes);
        self
    }
}

impl DataSource for MemSource {
    fn get(&self, id: &str) -> Result<Arc<[u8]>, LoadError> {
        self.files.get(id)
            .cloned()
            .ok_or_else(|| LoadError::not_found(id))
    }

    fn has(&self, id: &str) -> bool { self.files.contains_key(id) }
}
