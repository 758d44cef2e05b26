use std::collections::HashSet;

use crate::models::Record;

/// Unions previously persisted records with a new run's output.
pub struct MeasurementMerger;

impl MeasurementMerger {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate existing and new records, drop duplicates by dedup key
    /// (first occurrence wins, so persisted records take precedence over a
    /// re-run), and sort ascending by the temporal field. Idempotent: merging
    /// the same records twice leaves the result unchanged.
    pub fn merge<T: Record>(&self, existing: Vec<T>, new: Vec<T>) -> Vec<T> {
        let mut seen = HashSet::new();
        let mut merged: Vec<T> = existing
            .into_iter()
            .chain(new)
            .filter(|record| seen.insert(record.dedup_key()))
            .collect();
        merged.sort_by_key(|record| record.sort_key());
        merged
    }
}

impl Default for MeasurementMerger {
    fn default() -> Self {
        Self::new()
    }
}
