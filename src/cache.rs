use std::collections::HashMap;
use std::sync::Arc;

use crate::options::DataKey;
use crate::types::EmbeddingRow;

/// Session cache of fetched row sets, keyed by (dataset, sorted,
/// normalized). Entries live until [`RowCache::clear`]; nothing is
/// evicted or invalidated.
#[derive(Debug, Default)]
pub struct RowCache {
    entries: HashMap<DataKey, Arc<Vec<EmbeddingRow>>>,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &DataKey) -> Option<Arc<Vec<EmbeddingRow>>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: DataKey, rows: Arc<Vec<EmbeddingRow>>) {
        self.entries.insert(key, rows);
    }

    pub fn contains(&self, key: &DataKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct (dataset, options) variants held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry; part of the renderer reset lifecycle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DisplayOptions;

    fn rows() -> Arc<Vec<EmbeddingRow>> {
        Arc::new(vec![EmbeddingRow {
            filename: "a.jpg".into(),
            embedding: vec![0.0, 1.0],
        }])
    }

    #[test]
    fn insert_then_get_same_key() {
        let mut cache = RowCache::new();
        let key = DataKey::new("cats", DisplayOptions::default());
        assert!(cache.get(&key).is_none());

        cache.insert(key.clone(), rows());
        let hit = cache.get(&key).expect("entry present");
        assert_eq!(hit.len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn variants_are_separate_entries() {
        let mut cache = RowCache::new();
        let plain = DataKey::new("cats", DisplayOptions::default());
        let sorted = DataKey::new(
            "cats",
            DisplayOptions {
                sorted: true,
                normalized: false,
            },
        );

        cache.insert(plain.clone(), rows());
        assert!(!cache.contains(&sorted));
        cache.insert(sorted.clone(), rows());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_empties_the_session() {
        let mut cache = RowCache::new();
        cache.insert(DataKey::new("cats", DisplayOptions::default()), rows());
        cache.clear();
        assert!(cache.is_empty());
    }
}
