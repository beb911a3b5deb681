pub mod filters;
mod page;
pub mod tabs;

pub use page::TransactionPage;
