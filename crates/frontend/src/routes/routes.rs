use crate::layout::left::Navbar;
use crate::layout::nav_state::use_nav_state;
use crate::layout::Shell;
use crate::views::misc::MiscInfoView;
use crate::views::transaction::TransactionPage;
use leptos::prelude::*;

/// Top-level section of a router state: "transaction.traces" -> "transaction"
pub fn section_of(state: &str) -> &str {
    state.split('.').next().unwrap_or(state)
}

#[component]
fn MainContent() -> impl IntoView {
    let nav = use_nav_state();
    let on_heading = nav.heading_callback();
    // switching tabs inside a section must not remount the section's view
    let section = Memo::new(move |_| section_of(&nav.current.get()).to_string());

    move || match section.get().as_str() {
        "misc" => view! { <MiscInfoView on_heading=on_heading /> }.into_any(),
        "transaction" => view! { <TransactionPage on_heading=on_heading /> }.into_any(),
        other => {
            log::warn!("Unknown section '{}'", other);
            view! { <div class="placeholder">{format!("Unknown view: {}", other)}</div> }
                .into_any()
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_nav_state();

    // Initialize history integration. This runs once when the component is created.
    nav.init_history_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <MainContent /> }.into_any()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_of() {
        assert_eq!(section_of("transaction.traces"), "transaction");
        assert_eq!(section_of("misc.heap-dump"), "misc");
        assert_eq!(section_of("misc"), "misc");
        assert_eq!(section_of(""), "");
    }
}
