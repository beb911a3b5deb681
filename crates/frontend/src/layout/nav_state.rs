//! Navigation state owned by the layout.
//!
//! Views never write to the header or navbar directly: they hand a
//! [`PageHeading`] to the layout through a callback and read the current
//! router state through [`NavState`].

use crate::shared::dom;
use leptos::ev;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

pub const DEFAULT_STATE: &str = "transaction.overview";

/// What a view wants the layout to show while it is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeading {
    pub document_title: String,
    pub title: String,
    pub navbar_item: String,
}

impl PageHeading {
    /// Document title reads "<section> · <product>"
    pub fn new(section: &str, title: &str, navbar_item: &str, product: &str) -> Self {
        Self {
            document_title: format!("{} \u{b7} {}", section, product),
            title: title.to_string(),
            navbar_item: navbar_item.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct NavState {
    /// Router state name, e.g. "transaction.traces" or "misc.heap-dump"
    pub current: RwSignal<String>,
    pub title: RwSignal<String>,
    pub active_navbar_item: RwSignal<Option<String>>,
    listeners: StoredValue<Vec<(u64, Callback<String>)>>,
    next_listener_id: StoredValue<u64>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(DEFAULT_STATE.to_string()),
            title: RwSignal::new(String::new()),
            active_navbar_item: RwSignal::new(None),
            listeners: StoredValue::new(Vec::new()),
            next_listener_id: StoredValue::new(1),
        }
    }

    pub fn apply_heading(&self, heading: PageHeading) {
        dom::set_document_title(&heading.document_title);
        self.title.set(heading.title);
        self.active_navbar_item.set(Some(heading.navbar_item));
    }

    /// Callback handed to views so they can announce their heading
    pub fn heading_callback(&self) -> Callback<PageHeading> {
        let this = *self;
        Callback::new(move |heading: PageHeading| this.apply_heading(heading))
    }

    /// Register a listener invoked with the new location before a state change
    pub fn on_navigation_start(&self, listener: Callback<String>) -> u64 {
        let id = self.next_listener_id.get_value();
        self.next_listener_id.set_value(id + 1);
        self.listeners.update_value(|l| l.push((id, listener)));
        id
    }

    pub fn remove_navigation_listener(&self, id: u64) {
        // the owner may already be gone during teardown
        let _ = self.listeners.try_update_value(|l| l.retain(|(lid, _)| *lid != id));
    }

    fn notify_navigation_start(&self, location: &str) {
        let listeners = self
            .listeners
            .with_value(|l| l.iter().map(|(_, cb)| *cb).collect::<Vec<_>>());
        for listener in listeners {
            listener.run(location.to_string());
        }
    }

    /// Programmatic navigation, recorded in browser history
    pub fn navigate(&self, state: &str) {
        if self.current.get_untracked() == state {
            return;
        }
        let url = state_url(state);
        log::debug!("navigate: {} -> {}", self.current.get_untracked(), state);
        self.notify_navigation_start(&url);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            }
        }
        self.current.set(state.to_string());
    }

    /// Read the initial state from the URL and follow back/forward navigation
    pub fn init_history_integration(&self) {
        if let Some(state) = current_search().as_deref().and_then(state_from_search) {
            self.current.set(state);
        }

        let this = *self;
        // lives as long as the page
        let _listener = window_event_listener(ev::popstate, move |_| {
            let state = current_search()
                .as_deref()
                .and_then(state_from_search)
                .unwrap_or_else(|| DEFAULT_STATE.to_string());
            log::debug!("popstate -> {}", state);
            this.notify_navigation_start(&state_url(&state));
            this.current.set(state);
        });
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav_state() -> NavState {
    use_context::<NavState>().expect("NavState context not found")
}

fn current_search() -> Option<String> {
    window().and_then(|w| w.location().search().ok())
}

/// Relative URL that selects `state`, also used as the tab link target
pub fn state_url(state: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("state", state)])).unwrap_or_default();
    format!("?{}", query)
}

pub fn state_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("state").filter(|s| !s.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_search() {
        assert_eq!(
            state_from_search("?state=misc.heap-dump"),
            Some("misc.heap-dump".to_string())
        );
        assert_eq!(
            state_from_search("state=transaction.traces&other=1"),
            Some("transaction.traces".to_string())
        );
        assert_eq!(state_from_search(""), None);
        assert_eq!(state_from_search("?state="), None);
    }

    #[test]
    fn test_page_heading_document_title() {
        let heading = PageHeading::new("Misc", "Misc JVM stuff", "misc", "Monitor");
        assert_eq!(heading.document_title, "Misc \u{b7} Monitor");
        assert_eq!(heading.title, "Misc JVM stuff");
        assert_eq!(heading.navbar_item, "misc");
    }

    #[test]
    fn test_state_url_round_trips() {
        let url = state_url("transaction.traces");
        assert!(url.starts_with("?state="));
        assert_eq!(state_from_search(&url), Some("transaction.traces".to_string()));
    }
}
