use super::tabs::state::WatchedFilters;
use contracts::transaction::tab_bar::TabBarQuery;
use leptos::prelude::*;

const MINUTE_MILLIS: i64 = 60 * 1000;

/// Chart range presets offered above the tab strip
pub const RANGE_PRESETS: [(&str, i64); 3] = [
    ("30m", 30 * MINUTE_MILLIS),
    ("4h", 4 * 60 * MINUTE_MILLIS),
    ("1d", 24 * 60 * MINUTE_MILLIS),
];

pub const DEFAULT_RANGE_MILLIS: i64 = 4 * 60 * MINUTE_MILLIS;

/// Filters owned by the transaction page and shared with its children
#[derive(Clone, Copy)]
pub struct TransactionFilters {
    pub chart_from: RwSignal<i64>,
    pub chart_to: RwSignal<i64>,
    pub transaction_type: RwSignal<String>,
    pub transaction_name: RwSignal<Option<String>>,
    /// Bumped to force dependent charts and counts to reload
    pub chart_refresh: RwSignal<u64>,
}

impl TransactionFilters {
    pub fn new(now_millis: i64, transaction_type: &str) -> Self {
        Self {
            chart_from: RwSignal::new(now_millis - DEFAULT_RANGE_MILLIS),
            chart_to: RwSignal::new(now_millis),
            transaction_type: RwSignal::new(transaction_type.to_string()),
            transaction_name: RwSignal::new(None),
            chart_refresh: RwSignal::new(0),
        }
    }

    /// Tracked read of the values that trigger a tab bar refresh
    pub fn watched(&self) -> WatchedFilters {
        WatchedFilters {
            from: self.chart_from.get(),
            to: self.chart_to.get(),
            transaction_name: self.transaction_name.get(),
            chart_refresh: self.chart_refresh.get(),
        }
    }

    pub fn query_untracked(&self) -> TabBarQuery {
        TabBarQuery {
            from: self.chart_from.get_untracked(),
            to: self.chart_to.get_untracked(),
            transaction_type: self.transaction_type.get_untracked(),
            transaction_name: self.transaction_name.get_untracked(),
        }
    }

    pub fn show_last(&self, now_millis: i64, range_millis: i64) {
        self.chart_from.set(now_millis - range_millis);
        self.chart_to.set(now_millis);
    }

    pub fn set_transaction_name(&self, name: String) {
        let name = name.trim();
        self.transaction_name
            .set(if name.is_empty() { None } else { Some(name.to_string()) });
    }

    pub fn bump_refresh(&self) {
        self.chart_refresh.update(|n| *n += 1);
    }
}

pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}
