//! A frequency store held in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::capability::FrequencyStore;
use crate::error::BoxError;

/// Reduction counts kept in a map.
///
/// The total is the sum of all counts unless set with
/// [`InMemoryFrequencyStore::with_total`], which lets a store stand in for
/// a corpus whose other keys are not loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryFrequencyStore {
    counts: HashMap<String, u64>,
    total: Option<u64>,
}

impl InMemoryFrequencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load counts from a JSON object such as
    /// `{"counts": {"NONCONDITIONAL-ARE>PL": 3}, "total": 10}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Count one more occurrence of `key`.
    pub fn record(&mut self, key: impl Into<String>) {
        let count = self.counts.entry(key.into()).or_default();
        *count = count.saturating_add(1);
    }

    /// Set the count of `key`.
    pub fn insert(&mut self, key: impl Into<String>, count: u64) {
        self.counts.insert(key.into(), count);
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total.unwrap_or_else(|| {
            self.counts
                .values()
                .fold(0_u64, |total, count| total.saturating_add(*count))
        })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<String> for InMemoryFrequencyStore {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut store = Self::new();
        for key in iter {
            store.record(key);
        }
        store
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for InMemoryFrequencyStore {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, count) in iter {
            store.insert(key, count);
        }
        store
    }
}

#[async_trait]
impl FrequencyStore for InMemoryFrequencyStore {
    async fn count(&self, key: &str) -> Result<u64, BoxError> {
        Ok(self.get(key))
    }

    async fn total_count(&self) -> Result<u64, BoxError> {
        Ok(self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn recording_keys_counts_them() {
        let store: InMemoryFrequencyStore = ["A-B>SG", "A-B>SG", "A-C>PL"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(store.get("A-B>SG"), 2);
        assert_eq!(store.get("A-C>PL"), 1);
        assert_eq!(store.get("A-D>PL"), 0);
        assert_eq!(store.total(), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn huge_counts_saturate_the_total() {
        let mut store =
            InMemoryFrequencyStore::from_iter([("A-B>SG", u64::MAX), ("A-B>PL", 2_u64)]);
        assert_eq!(store.total(), u64::MAX);

        store.record("A-B>SG");
        assert_eq!(store.get("A-B>SG"), u64::MAX);
    }

    #[test]
    fn explicit_total_overrides_sum() {
        let store = InMemoryFrequencyStore::from_iter([("A-B>SG", 4_u64)]).with_total(100);
        assert_eq!(store.total(), 100);
    }

    #[test]
    fn loads_from_json() -> TestResult {
        let store = InMemoryFrequencyStore::from_json(
            r#"{ "counts": { "NONCONDITIONAL-ARE>PL": 3, "NONCONDITIONAL-IS>SG": 5 } }"#,
        )?;
        assert_eq!(store.get("NONCONDITIONAL-ARE>PL"), 3);
        assert_eq!(store.total(), 8);
        Ok(())
    }

    #[tokio::test]
    async fn serves_as_a_frequency_store() -> TestResult {
        let mut store = InMemoryFrequencyStore::new();
        store.insert("NONCONDITIONAL-ARE>PL", 7);
        store.record("NONCONDITIONAL-ARE>PL");

        let store: &dyn FrequencyStore = &store;
        assert_eq!(store.count("NONCONDITIONAL-ARE>PL").await?, 8);
        assert_eq!(store.count("missing").await?, 0);
        assert_eq!(store.total_count().await?, 8);
        Ok(())
    }
}
