use crate::layout::nav_state::{use_nav_state, PageHeading};
use crate::shared::config::ConsoleConfig;
use crate::views::jvm::heap_dump::HeapDumpView;
use leptos::prelude::*;

/// Sub-views of the misc section: (router state, label)
pub const MISC_VIEWS: [(&str, &str); 1] = [("misc.heap-dump", "Heap dump")];

/// True when `view_name` is the router's current state
pub fn is_current_view(current: &str, view_name: &str) -> bool {
    current == view_name
}

#[component]
pub fn MiscInfoView(on_heading: Callback<PageHeading>) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig context not found");
    let nav = use_nav_state();
    on_heading.run(PageHeading::new(
        "Misc",
        "Misc JVM stuff",
        "misc",
        &config.ui.product_name,
    ));

    view! {
        <div class="misc-page">
            <ul class="misc-page__nav">
                {MISC_VIEWS
                    .into_iter()
                    .map(move |(state, label)| {
                        view! {
                            <li
                                class:active=move || is_current_view(&nav.current.get(), state)
                                on:click=move |_| nav.navigate(state)
                            >
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="misc-page__content">
                <Show when=move || is_current_view(&nav.current.get(), "misc.heap-dump")>
                    <HeapDumpView />
                </Show>
            </div>
        </div>
    }
}
