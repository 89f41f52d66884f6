//! Shared caches for remote Jenkins documents.
//!
//! A `CacheContext` owns the three caches described by the access layer:
//! raw text, HTTP headers, and the write-back `config.xml` cache with its
//! dirty flag. Every [`RestClient`](crate::client::RestClient) cloned from
//! the same root holds an `Arc` to one context, so all of them observe one
//! coherent view. Entries are never evicted individually; only [`clear`]
//! empties the caches.
//!
//! [`clear`]: CacheContext::clear

use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::header::HeaderMap;

#[derive(Debug, Default)]
struct ConfigCache {
    entries: HashMap<String, String>,
    needs_flush: bool,
}

/// Process-shared cache state for one Jenkins connection and its clones.
#[derive(Debug)]
pub struct CacheContext {
    enabled: bool,
    text: Mutex<HashMap<String, String>>,
    headers: Mutex<HashMap<String, HeaderMap>>,
    config: Mutex<ConfigCache>,
}

impl CacheContext {
    /// Context that records fetched documents and holds configuration
    /// writes until an explicit flush.
    pub fn enabled() -> Self {
        Self::new(true)
    }

    /// Context that passes every read and write straight through to the
    /// server. This is the default for new connections.
    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            text: Mutex::new(HashMap::new()),
            headers: Mutex::new(HashMap::new()),
            config: Mutex::new(ConfigCache::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn text(&self, locator: &str) -> Option<String> {
        self.text.lock().unwrap().get(locator).cloned()
    }

    pub(crate) fn store_text(&self, locator: &str, text: &str) {
        if !self.enabled {
            return;
        }
        self.text
            .lock()
            .unwrap()
            .insert(locator.to_string(), text.to_string());
    }

    pub(crate) fn headers(&self, locator: &str) -> Option<HeaderMap> {
        self.headers.lock().unwrap().get(locator).cloned()
    }

    pub(crate) fn store_headers(&self, locator: &str, headers: &HeaderMap) {
        if !self.enabled {
            return;
        }
        self.headers
            .lock()
            .unwrap()
            .insert(locator.to_string(), headers.clone());
    }

    pub(crate) fn config(&self, locator: &str) -> Option<String> {
        self.config.lock().unwrap().entries.get(locator).cloned()
    }

    pub(crate) fn store_config(&self, locator: &str, xml: &str) {
        let mut guard = self.config.lock().unwrap();
        guard.entries.insert(locator.to_string(), xml.to_string());
        guard.needs_flush = true;
    }

    /// Snapshots the write-back entries and clears the dirty flag in one
    /// critical section, so the caller can post the documents without
    /// holding any lock. Returns `None` when there is nothing to flush.
    /// The entries themselves stay cached for subsequent reads.
    pub(crate) fn take_dirty_snapshot(&self) -> Option<Vec<(String, String)>> {
        let mut guard = self.config.lock().unwrap();
        if !guard.needs_flush {
            return None;
        }
        guard.needs_flush = false;
        Some(
            guard
                .entries
                .iter()
                .map(|(locator, xml)| (locator.clone(), xml.clone()))
                .collect(),
        )
    }

    /// True while at least one cached configuration write has not been
    /// committed to the server.
    pub fn is_dirty(&self) -> bool {
        self.config.lock().unwrap().needs_flush
    }

    /// Discards all cached data so subsequent operations reload from the
    /// server. Callers holding pending writes must flush first or lose
    /// them.
    pub fn clear(&self) {
        self.text.lock().unwrap().clear();
        self.headers.lock().unwrap().clear();
        let mut config = self.config.lock().unwrap();
        config.entries.clear();
        config.needs_flush = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_context_ignores_text_writes() {
        let cache = CacheContext::disabled();
        cache.store_text("http://jenkins/", "body");
        assert!(cache.text("http://jenkins/").is_none());
    }

    #[test]
    fn test_dirty_snapshot_clears_flag_and_keeps_entries() {
        let cache = CacheContext::enabled();
        cache.store_config("http://jenkins/job/a/", "<project/>");
        assert!(cache.is_dirty());

        let snapshot = cache.take_dirty_snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(!cache.is_dirty());
        assert_eq!(
            cache.config("http://jenkins/job/a/").as_deref(),
            Some("<project/>")
        );

        assert!(cache.take_dirty_snapshot().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let cache = CacheContext::enabled();
        cache.store_text("http://jenkins/", "body");
        cache.store_config("http://jenkins/job/a/", "<project/>");
        cache.clear();

        assert!(cache.text("http://jenkins/").is_none());
        assert!(cache.config("http://jenkins/job/a/").is_none());
        assert!(!cache.is_dirty());
    }
}
