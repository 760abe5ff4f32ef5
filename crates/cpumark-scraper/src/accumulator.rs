use cpumark_core::CpuRecord;
use std::collections::HashSet;

/// The growing, deduplicated collection of records gathered across pages.
///
/// Insertion order is preserved; membership checks go through a hash set of
/// full records, so merging a page is linear in the page size rather than in
/// the accumulated total.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<CpuRecord>,
    seen: HashSet<CpuRecord>,
}

impl RecordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append without a duplicate check. Used for the first page, which is
    /// merged unconditionally.
    pub fn push_unchecked(&mut self, record: CpuRecord) {
        self.seen.insert(record.clone());
        self.records.push(record);
    }

    /// Append unless a field-wise identical record is already present.
    /// Returns whether the record was accepted.
    pub fn insert(&mut self, record: CpuRecord) -> bool {
        if !self.seen.insert(record.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// The most recently appended record.
    #[must_use]
    pub fn last(&self) -> Option<&CpuRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CpuRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<CpuRecord> {
        self.records
    }
}
