use super::filters::{now_millis, TransactionFilters, RANGE_PRESETS};
use super::tabs::{TransactionTab, TransactionTabView};
use crate::layout::nav_state::{use_nav_state, PageHeading};
use crate::shared::config::ConsoleConfig;
use leptos::prelude::*;
use thaw::*;

const DEFAULT_TRANSACTION_TYPE: &str = "Web";

/// Transaction detail screen: filter bar, tab strip and the active tab's panel
#[component]
pub fn TransactionPage(on_heading: Callback<PageHeading>) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig context not found");
    let nav = use_nav_state();
    on_heading.run(PageHeading::new(
        "Transactions",
        "Transactions",
        "transaction",
        &config.ui.product_name,
    ));

    let filters = TransactionFilters::new(now_millis(), DEFAULT_TRANSACTION_TYPE);
    let active_tab = Signal::derive(move || {
        TransactionTab::from_state_name(&nav.current.get()).unwrap_or(TransactionTab::Overview)
    });

    view! {
        <div class="transaction-page">
            <Flex align=FlexAlign::Center gap=FlexGap::Small class="transaction-page__filters">
                <ButtonGroup>
                    {RANGE_PRESETS
                        .into_iter()
                        .map(move |(label, range)| {
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| filters.show_last(now_millis(), range)
                                >
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </ButtonGroup>
                <input
                    class="form__input"
                    type="text"
                    placeholder="All transactions"
                    prop:value=move || filters.transaction_name.get().unwrap_or_default()
                    on:change=move |ev| filters.set_transaction_name(event_target_value(&ev))
                />
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| filters.bump_refresh()
                >
                    "Refresh"
                </Button>
            </Flex>

            <TransactionTabView filters=filters active_tab=active_tab />

            <div class="transaction-page__panel" role="tabpanel">
                <ChartPanel filters=filters active_tab=active_tab />
            </div>
        </div>
    }
}

/// Stand-in for the tab's chart; redraws whenever the chart refresh counter moves
#[component]
fn ChartPanel(filters: TransactionFilters, active_tab: Signal<TransactionTab>) -> impl IntoView {
    view! {
        <div class="chart-panel">
            <h3>{move || active_tab.get().label()}</h3>
            <p class="chart-panel__range">
                {move || {
                    format!(
                        "{} .. {} (redraw #{})",
                        filters.chart_from.get(),
                        filters.chart_to.get(),
                        filters.chart_refresh.get(),
                    )
                }}
            </p>
        </div>
    }
}
