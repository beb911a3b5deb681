use crate::layout::nav_state::NavState;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::events::TraceCountChannel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    // Navigation state is owned here and handed down; views report headings back.
    provide_context(NavState::new());

    // `updateTraceTabCount` channel between trace tables and the tab strip
    provide_context(TraceCountChannel::new());

    view! {
        <AppRoutes />
    }
}
