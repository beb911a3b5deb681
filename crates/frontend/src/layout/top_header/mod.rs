//! TopHeader component - application top bar with product name and page title.

use crate::layout::nav_state::use_nav_state;
use crate::shared::config::ConsoleConfig;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_nav_state();
    let product = use_context::<ConsoleConfig>()
        .map(|c| c.ui.product_name)
        .unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{product}</span>
            </div>
            <div class="top-header__page">
                <h1>{move || nav.title.get()}</h1>
            </div>
        </div>
    }
}
