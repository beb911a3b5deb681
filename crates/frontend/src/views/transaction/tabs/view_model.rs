use super::interaction::{self, TabClick, TAB_STRIP_SELECTOR};
use super::model::{self, TabBarEndpoint};
use super::state::{RefreshSchedule, TabBarState, TransactionTab};
use crate::layout::nav_state::NavState;
use crate::shared::dom::{self, Modifiers};
use crate::shared::events::{self, TraceCountChannel, TraceCountReport};
use crate::shared::http::{errors, GlooTransport};
use crate::views::transaction::filters::TransactionFilters;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{KeyboardEvent, MouseEvent};

/// ViewModel of the transaction tab strip
///
/// - Keeps tab bar counts in step with the page filters (debounced)
/// - Drops responses of superseded refreshes
/// - Handles click/arrow-key tab switching and stale focus after navigation
#[derive(Clone, Copy)]
pub struct TransactionTabViewModel {
    pub state: RwSignal<TabBarState>,
    pub filters: TransactionFilters,
    pub active_tab: Signal<TransactionTab>,
    schedule: StoredValue<RefreshSchedule>,
    endpoint: StoredValue<TabBarEndpoint>,
}

impl TransactionTabViewModel {
    pub fn new(
        filters: TransactionFilters,
        active_tab: Signal<TransactionTab>,
        endpoint: TabBarEndpoint,
    ) -> Self {
        Self {
            state: RwSignal::new(TabBarState::new()),
            filters,
            active_tab,
            schedule: StoredValue::new(RefreshSchedule::new()),
            endpoint: StoredValue::new(endpoint),
        }
    }

    /// Schedule a refresh on mount and whenever a watched filter changes
    pub fn watch_filters(&self) {
        let vm = *self;
        Effect::new(move |_| {
            let watched = vm.filters.watched();
            let generation = vm
                .schedule
                .try_update_value(|s| s.observe(watched))
                .flatten();
            if let Some(generation) = generation {
                vm.schedule_refresh(generation);
            }
        });
    }

    fn schedule_refresh(&self, generation: u64) {
        let vm = *self;
        let delay = self.endpoint.with_value(|e| e.debounce_ms);
        spawn_local(async move {
            // lets the primary chart requests sharing this trigger go first
            TimeoutFuture::new(delay).await;
            let current = vm.schedule.try_with_value(|s| s.is_current(generation));
            if current == Some(true) {
                vm.refresh();
            }
        });
    }

    pub fn refresh(&self) {
        let Some(ticket) = self.state.try_update(|s| s.issue_ticket()) else {
            return;
        };
        let query = self.filters.query_untracked();
        let endpoint = self.endpoint.get_value();
        let state = self.state;
        let active_tab = self.active_tab;

        spawn_local(async move {
            log::debug!("tab bar refresh {:?} issued", ticket);
            let result = model::fetch_tab_bar_data(&GlooTransport, &endpoint, &query).await;
            let Some(active) = active_tab.try_get_untracked() else {
                return;
            };
            let _ = state.try_update(|s| {
                let applied = match result {
                    Ok(data) => s.apply(ticket, data, active),
                    Err(e) => s.apply_error(ticket, errors::describe(&e)),
                };
                if !applied {
                    log::debug!("tab bar refresh {:?} superseded, response dropped", ticket);
                }
            });
        });
    }

    /// Apply `updateTraceTabCount` reports published after this strip mounted
    pub fn listen_trace_count(&self, channel: TraceCountChannel) {
        let seen = events::seen_seq(channel.latest_untracked());
        let vm = *self;
        Effect::new(move |_| vm.take_trace_report(channel.latest(), seen));
    }

    fn take_trace_report(&self, report: Option<TraceCountReport>, seen: u64) {
        if let Some(count) = events::count_after(report, seen) {
            self.state.update(|s| s.report_filtered_trace_count(count));
        }
    }

    /// Blur a stale focused tab when navigation starts, e.g. on the back button
    pub fn register_navigation_hook(&self, nav: NavState) {
        let id = nav.on_navigation_start(Callback::new(|location: String| {
            blur_stale_tab_focus(&location);
        }));
        on_cleanup(move || nav.remove_navigation_listener(id));
    }

    pub fn trace_count(&self) -> String {
        self.state.with(|s| s.trace_count())
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.with(|s| s.is_refreshing())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(|e| e.to_string()))
    }

    pub fn is_active(&self, tab: TransactionTab) -> bool {
        self.active_tab.get() == tab
    }

    pub fn on_tab_click(&self, tab: TransactionTab, ev: MouseEvent, nav: NavState) {
        let modifiers = Modifiers::from_mouse(&ev);
        match interaction::tab_click_action(tab, self.active_tab.get_untracked(), modifiers) {
            TabClick::RefreshCharts => {
                ev.prevent_default();
                self.filters.bump_refresh();
            }
            TabClick::Navigate => {
                // with a modifier the browser opens the link on its own
                if !modifiers.any() {
                    ev.prevent_default();
                    nav.navigate(tab.state_name());
                }
            }
        }
    }

    pub fn on_tab_keydown(&self, left: Option<&str>, right: Option<&str>, ev: &KeyboardEvent) {
        let modifiers = Modifiers::from_keyboard(ev);
        let Some(target) = interaction::tab_key_target(&ev.key(), modifiers, left, right) else {
            return;
        };
        // keeps the page from scrolling sideways before the switch
        ev.prevent_default();
        let target = target.to_string();
        spawn_local(async move {
            // focus only sticks once the keydown has finished dispatching
            TimeoutFuture::new(0).await;
            dom::click_and_focus(&target);
        });
    }
}

fn blur_stale_tab_focus(location: &str) {
    let Some(focused) = dom::focused_within(TAB_STRIP_SELECTOR) else {
        return;
    };
    let link = focused.get_attribute("href");
    if interaction::should_blur(link.as_deref(), location) {
        let _ = focused.blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::transaction::tab_bar::TabBarData;

    fn view_model() -> TransactionTabViewModel {
        let endpoint = TabBarEndpoint {
            base_path: "backend".to_string(),
            service: "transaction".to_string(),
            debounce_ms: 100,
        };
        TransactionTabViewModel::new(
            TransactionFilters::new(1_000_000, "Web"),
            Signal::derive(|| TransactionTab::Overview),
            endpoint,
        )
    }

    fn load(vm: &TransactionTabViewModel, trace_count: u64) {
        vm.state.update(|s| {
            let ticket = s.issue_ticket();
            s.apply(ticket, TabBarData::with_trace_count(trace_count), TransactionTab::Overview);
        });
    }

    #[test]
    fn test_published_trace_count_overrides_server_count() {
        let owner = Owner::new();
        owner.with(|| {
            let channel = TraceCountChannel::new();
            channel.publish(99);
            let vm = view_model();
            let seen = events::seen_seq(channel.latest_untracked());
            load(&vm, 12);

            vm.take_trace_report(channel.latest_untracked(), seen);
            assert_eq!(vm.trace_count(), "12");

            channel.publish(3);
            vm.take_trace_report(channel.latest_untracked(), seen);
            assert_eq!(vm.trace_count(), "3");
            assert!(!vm.is_refreshing());

            // an applied refresh on a non-traces tab drops the override
            load(&vm, 15);
            assert_eq!(vm.trace_count(), "15");
        });
    }
}
