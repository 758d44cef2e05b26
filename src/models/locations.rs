use std::collections::BTreeSet;

/// Ordered lookup from raw report labels to canonical location names.
///
/// Canonical names map to themselves, so a lookup never fails for canonical
/// input; aliases cover the abbreviated or inconsistently spelled labels
/// found in older reports. Match order follows construction order, with
/// canonical names tried before aliases.
#[derive(Debug, Clone)]
pub struct LocationTable {
    entries: Vec<(String, String)>,
}

impl LocationTable {
    pub fn new(canonical: &[&str], aliases: &[(&str, &str)]) -> Self {
        let mut entries = Vec::with_capacity(canonical.len() + aliases.len());
        for name in canonical {
            entries.push((name.to_string(), name.to_string()));
        }
        for (alias, target) in aliases {
            entries.push((alias.to_string(), target.to_string()));
        }
        Self { entries }
    }

    /// First label the line equals or starts with, paired with its canonical
    /// name.
    pub fn match_line(&self, line: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(label, _)| line == label.as_str() || line.starts_with(label.as_str()))
            .map(|(label, canonical)| (label.as_str(), canonical.as_str()))
    }

    /// Distinct canonical names, sorted.
    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|(_, canonical)| canonical.as_str())
            .collect()
    }
}
