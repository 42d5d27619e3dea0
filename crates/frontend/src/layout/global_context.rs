use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Tab store and layout flags, provided once at the app root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Per-tab counters; a list page re-fetches when its counter moves
    pub refresh: RwSignal<HashMap<String, u64>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            refresh: RwSignal::new(HashMap::new()),
        }
    }

    /// Restores `?active=` from the URL and keeps it in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let title = super::tabs::tab_label_for_key(&active_key);
            self.open_tab(&active_key, title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| push_unique(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
        self.refresh.update(|tokens| {
            tokens.remove(key);
        });
    }

    /// Closes a detail tab after a successful mutation and asks the lists
    /// showing that record to re-fetch
    pub fn finish_detail(&self, detail_key: &str, list_keys: &[&str]) {
        self.close_tab(detail_key);
        for key in list_keys {
            self.request_refresh(key);
        }
    }

    pub fn request_refresh(&self, key: &str) {
        self.refresh
            .update(|tokens| *tokens.entry(key.to_string()).or_insert(0) += 1);
    }

    /// Tracked read of the refresh counter of `key`
    pub fn refresh_token(&self, key: &str) -> u64 {
        self.refresh.with(|tokens| tokens.get(key).copied().unwrap_or(0))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if tabs.iter().any(|tab| tab.key == key) {
        return;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_a_tab_does_not_duplicate_it() {
        let mut tabs = Vec::new();
        push_unique(&mut tabs, "a002_vehicle", "Vehicles");
        push_unique(&mut tabs, "a002_vehicle_detail_v1", "Vehicle");
        push_unique(&mut tabs, "a002_vehicle", "Vehicles again");
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Vehicles");
    }
}
