use super::model::TabBarEndpoint;
use super::state::TransactionTab;
use super::view_model::TransactionTabViewModel;
use crate::layout::nav_state::{state_url, use_nav_state};
use crate::shared::config::ConsoleConfig;
use crate::shared::events::use_trace_count_channel;
use crate::views::transaction::filters::TransactionFilters;
use leptos::prelude::*;

#[component]
pub fn TransactionTabView(
    filters: TransactionFilters,
    #[prop(into)] active_tab: Signal<TransactionTab>,
) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig context not found");
    let nav = use_nav_state();
    let endpoint = TabBarEndpoint {
        base_path: config.backend.base_path.clone(),
        service: config.backend.transaction_service.clone(),
        debounce_ms: config.ui.tab_bar_debounce_ms,
    };

    let vm = TransactionTabViewModel::new(filters, active_tab, endpoint);
    vm.watch_filters();
    vm.listen_trace_count(use_trace_count_channel());
    vm.register_navigation_hook(nav);

    view! {
        <div class="transaction-tabs" role="tablist">
            {TransactionTab::all()
                .into_iter()
                .map(move |tab| {
                    let (left, right) = tab.neighbours();
                    view! {
                        <a
                            id=tab.element_id()
                            href=state_url(tab.state_name())
                            role="tab"
                            class="transaction-tabs__tab"
                            class:active=move || vm.is_active(tab)
                            aria-selected=move || vm.is_active(tab).to_string()
                            on:click=move |ev| vm.on_tab_click(tab, ev, nav)
                            on:keydown=move |ev| vm.on_tab_keydown(left, right, &ev)
                        >
                            {tab.label()}
                            {(tab == TransactionTab::Traces)
                                .then(move || {
                                    view! {
                                        <span
                                            class="transaction-tabs__badge"
                                            class:refreshing=move || vm.is_refreshing()
                                        >
                                            {move || vm.trace_count()}
                                        </span>
                                    }
                                })}
                        </a>
                    }
                })
                .collect_view()}
        </div>
        {move || {
            vm.error()
                .map(|e| view! { <div class="warning-box text-error">{e}</div> })
        }}
    }
}
