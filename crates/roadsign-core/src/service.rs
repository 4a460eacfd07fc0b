/// Data-loading service handing out immutable inventory snapshots.
///
/// The first call to [`DataService::snapshot`] loads both inventories;
/// later calls return the cached `Arc` until [`DataService::refresh`] is
/// called. Callers keep the `Arc` they were given, so a refresh never
/// changes data underneath a running computation.
use crate::analysis::classifier::ClassifierRules;
use crate::error::LoadError;
use crate::loader;
use crate::model::{SignageKind, SignageTable};
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Locations of the two inventory files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub vertical: PathBuf,
    pub horizontal: PathBuf,
}

/// Both inventories as loaded at one point in time.
#[derive(Debug)]
pub struct Snapshot {
    pub vertical: SignageTable,
    pub horizontal: SignageTable,
    pub loaded_at: DateTime<Local>,
}

impl Snapshot {
    pub fn table(&self, kind: SignageKind) -> &SignageTable {
        match kind {
            SignageKind::Vertical => &self.vertical,
            SignageKind::Horizontal => &self.horizontal,
        }
    }
}

/// Loads inventories once and caches the resulting snapshot.
pub struct DataService {
    sources: DataSources,
    rules: ClassifierRules,
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl DataService {
    pub fn new(sources: DataSources, rules: ClassifierRules) -> Self {
        Self {
            sources,
            rules,
            current: RwLock::new(None),
        }
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Return the cached snapshot, loading it on first use.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>, LoadError> {
        if let Some(snap) = self.current.read().as_ref() {
            return Ok(Arc::clone(snap));
        }

        let mut slot = self.current.write();
        // Another caller may have loaded while we waited for the write lock.
        if let Some(snap) = slot.as_ref() {
            return Ok(Arc::clone(snap));
        }
        let snap = Arc::new(self.load()?);
        *slot = Some(Arc::clone(&snap));
        Ok(snap)
    }

    /// Reload both inventories and replace the cached snapshot.
    ///
    /// On failure the previous snapshot stays cached.
    pub fn refresh(&self) -> Result<Arc<Snapshot>, LoadError> {
        let snap = Arc::new(self.load()?);
        *self.current.write() = Some(Arc::clone(&snap));
        info!("Inventory snapshot refreshed");
        Ok(snap)
    }

    /// `true` once a snapshot has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    fn load(&self) -> Result<Snapshot, LoadError> {
        let vertical = loader::load_vertical(&self.sources.vertical, &self.rules)?;
        let horizontal = loader::load_horizontal(&self.sources.horizontal, &self.rules)?;
        Ok(Snapshot {
            vertical,
            horizontal,
            loaded_at: Local::now(),
        })
    }
}
