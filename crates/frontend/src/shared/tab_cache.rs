//! Lazy per-tab loading for detail views.
//!
//! A sub-resource is fetched the first time its tab becomes active and kept
//! for the lifetime of the view. A failed tab is fetched again when it is
//! re-activated.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabCache<K, V> {
    pub active: K,
    entries: HashMap<K, LoadState<V>>,
}

impl<K, V> TabCache<K, V>
where
    K: Copy + Eq + Hash,
{
    pub fn new(initial: K) -> Self {
        Self {
            active: initial,
            entries: HashMap::new(),
        }
    }

    /// Switches the visible tab without touching the cache
    pub fn select(&mut self, tab: K) {
        self.active = tab;
    }

    /// Switches to `tab`; returns `true` when the caller must fetch it.
    /// The entry is marked `Loading` before returning.
    pub fn activate(&mut self, tab: K) -> bool {
        self.active = tab;
        let entry = self.entries.entry(tab).or_insert(LoadState::NotLoaded);
        match entry {
            LoadState::NotLoaded | LoadState::Failed(_) => {
                *entry = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Loaded(_) => false,
        }
    }

    pub fn resolve(&mut self, tab: K, result: Result<V, String>) {
        let state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e),
        };
        self.entries.insert(tab, state);
    }

    pub fn get(&self, tab: &K) -> &LoadState<V> {
        self.entries.get(tab).unwrap_or(&LoadState::NotLoaded)
    }

    pub fn loaded(&self, tab: &K) -> Option<&V> {
        self.get(tab).loaded()
    }

    pub fn active_state(&self) -> &LoadState<V> {
        self.get(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Tab {
        Business,
        Address,
    }

    #[test]
    fn first_activation_requests_fetch_once() {
        let mut cache: TabCache<Tab, Vec<String>> = TabCache::new(Tab::Business);
        assert_eq!(cache.get(&Tab::Address), &LoadState::NotLoaded);

        assert!(cache.activate(Tab::Address));
        assert!(cache.get(&Tab::Address).is_loading());
        assert!(!cache.activate(Tab::Address));

        cache.resolve(Tab::Address, Ok(vec![]));
        assert!(!cache.activate(Tab::Address));
        // loaded-but-empty is not the same as never fetched
        assert_eq!(cache.loaded(&Tab::Address), Some(&vec![]));
    }

    #[test]
    fn failed_tab_is_retried_on_reactivation() {
        let mut cache: TabCache<Tab, u8> = TabCache::new(Tab::Business);
        assert!(cache.activate(Tab::Address));
        cache.resolve(Tab::Address, Err("timeout".into()));
        assert_eq!(cache.active_state(), &LoadState::Failed("timeout".into()));

        cache.select(Tab::Business);
        assert!(cache.activate(Tab::Address));
        cache.resolve(Tab::Address, Ok(7));
        assert_eq!(cache.loaded(&Tab::Address), Some(&7));
    }
}
