/// In-memory inventory table produced by one load.
use super::record::{SignageKind, SignageRecord};
use crate::error::RecordError;

/// A source row that was dropped during loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the source file (header is line 1).
    pub line: u64,
    pub error: RecordError,
}

/// All records of one inventory, in file order.
#[derive(Debug, Clone)]
pub struct SignageTable {
    pub kind: SignageKind,
    pub records: Vec<SignageRecord>,
    /// Malformed rows that were skipped with a warning.
    pub skipped: Vec<SkippedRow>,
}

impl SignageTable {
    pub fn new(kind: SignageKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignageRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SignageTable {
    type Item = &'a SignageRecord;
    type IntoIter = std::slice::Iter<'a, SignageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
