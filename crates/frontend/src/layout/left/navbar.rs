use crate::layout::nav_state::use_nav_state;
use crate::shared::icons;
use leptos::prelude::*;

/// (navbar item, label, state opened on click)
const NAVBAR_ITEMS: [(&str, &str, &str); 2] = [
    ("transaction", "Transactions", "transaction.overview"),
    ("misc", "Misc", "misc.heap-dump"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_nav_state();

    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAVBAR_ITEMS
                    .into_iter()
                    .map(move |(item, title, state)| {
                        let is_active = move || {
                            nav.active_navbar_item.with(|active| active.as_deref() == Some(item))
                        };
                        view! {
                            <li class:active=is_active on:click=move |_| nav.navigate(state)>
                                {icons::icon(item)}
                                <span>{title}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
