//! Heap dump UI Module
//!
//! - model.rs: API functions (defaults, check disk space, dump heap)
//! - state.rs: form state with its two response slots
//! - view_model.rs: ViewModel with commands
//! - view.rs: Leptos component (pure UI)

pub mod model;
pub mod state;
mod view;
mod view_model;

pub use view::HeapDumpView;
pub use view_model::HeapDumpViewModel;
