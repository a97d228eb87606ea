use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

/// Identifies one translation: the direction tag keeps `to_english("x", "fr")` and
/// `between("x", "fr", "en")` apart even though their language pair is the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    direction: &'static str,
    source: String,
    target: String,
    text: String,
}

impl CacheKey {
    pub fn new(direction: &'static str, source: &str, target: &str, text: &str) -> Self {
        Self {
            direction,
            source: source.to_string(),
            target: target.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    text: String,
    stored_at: Instant,
    sequence: u64,
}

/// Bounded translation cache with a fixed time-to-live.
///
/// When full, inserting a new key evicts the globally oldest entry rather than
/// the least recently read one. Expired entries are treated as misses and are
/// only reclaimed by eviction or overwrite.
#[derive(Debug)]
pub struct TranslationCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    next_sequence: u64,
}

impl TranslationCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
            next_sequence: 0,
        }
    }

    pub fn get(&self, key: &CacheKey, now: Instant) -> Option<String> {
        self.entries
            .get(key)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) < self.ttl)
            .map(|entry| entry.text.clone())
    }

    pub fn insert(&mut self, key: CacheKey, text: String, now: Instant) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(
            key,
            CacheEntry {
                text,
                stored_at: now,
                sequence,
            },
        );
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.stored_at, entry.sequence))
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
