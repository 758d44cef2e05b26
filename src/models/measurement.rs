use std::collections::BTreeMap;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// One monthly value from a label-prefixed report row (ozone exceedance
/// tables). The detail string records which threshold the row describes,
/// determined by the row's position in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMeasurement {
    pub month: u32,
    pub location: String,
    pub value: f64,
    pub unit: String,
    pub detail: String,
}

/// One daily value from a date-prefixed report row (PM2.5 tables).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMeasurement {
    pub date: NaiveDate,
    pub location: String,
    pub value: f64,
    pub unit: String,
    pub aggregation: String,
}

/// Common view over the two measurement variants.
///
/// The variants keep distinct deduplication keys on purpose: monthly rows
/// carry a detail classification that disambiguates otherwise identical
/// observations, daily rows do not.
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Key: Eq + Hash;
    type SortKey: Ord;

    fn location(&self) -> &str;
    fn dedup_key(&self) -> Self::Key;
    fn sort_key(&self) -> Self::SortKey;
    /// Calendar date of the observation, when the variant carries one.
    fn observed_date(&self) -> Option<NaiveDate>;
}

impl Record for MonthlyMeasurement {
    type Key = (u32, String, String);
    type SortKey = u32;

    fn location(&self) -> &str {
        &self.location
    }

    fn dedup_key(&self) -> Self::Key {
        (self.month, self.location.clone(), self.detail.clone())
    }

    fn sort_key(&self) -> u32 {
        self.month
    }

    fn observed_date(&self) -> Option<NaiveDate> {
        None
    }
}

impl Record for DailyMeasurement {
    type Key = (NaiveDate, String);
    type SortKey = NaiveDate;

    fn location(&self) -> &str {
        &self.location
    }

    fn dedup_key(&self) -> Self::Key {
        (self.date, self.location.clone())
    }

    fn sort_key(&self) -> NaiveDate {
        self.date
    }

    fn observed_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

/// Accumulated extraction output in the two views consumers need: the flat
/// list for the per-source file and the per-location grouping for the
/// cumulative files.
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    pub all: Vec<T>,
    pub by_location: BTreeMap<String, Vec<T>>,
}

impl<T: Record> Extraction<T> {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            by_location: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, record: T) {
        self.by_location
            .entry(record.location().to_string())
            .or_default()
            .push(record.clone());
        self.all.push(record);
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn location_count(&self) -> usize {
        self.by_location.len()
    }
}

impl<T: Record> Default for Extraction<T> {
    fn default() -> Self {
        Self::new()
    }
}
