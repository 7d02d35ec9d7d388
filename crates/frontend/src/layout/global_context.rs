use crate::layout::pages::{is_known_page, DEFAULT_PAGE};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// App-wide navigation state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the page shown in the center area
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the page from `?active=` and keeps the query string in sync
    /// with later navigation.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = page_from_query(&search) {
            self.open_page(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", active_key.as_str())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        if !is_known_page(key) {
            log::warn!("open_page: unknown page '{}'", key);
            return;
        }
        log::debug!("open_page: '{}'", key);
        self.active.set(key.to_string());
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

/// Page key from a `?active=...` query string, if it names a known page.
pub fn page_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| is_known_page(k)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(
            page_from_query("?active=a002_product").as_deref(),
            Some("a002_product")
        );
        assert_eq!(
            page_from_query("active=u501_import_csv&x=1").as_deref(),
            Some("u501_import_csv")
        );
        assert_eq!(page_from_query("?active=a099_unknown"), None);
        assert_eq!(page_from_query(""), None);
    }
}
