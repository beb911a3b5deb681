//! Transaction tab strip
//!
//! - state.rs: tab bar state, refresh tickets and debounce bookkeeping
//! - interaction.rs: click, arrow-key and focus rules
//! - model.rs: tab-bar-data API call
//! - view_model.rs: reactive wiring and commands
//! - view.rs: Leptos component

pub mod interaction;
pub mod model;
pub mod state;
mod view;
mod view_model;

pub use state::TransactionTab;
pub use view::TransactionTabView;
pub use view_model::TransactionTabViewModel;
