pub mod api_utils;
pub mod config;
pub mod dom;
pub mod events;
pub mod http;
pub mod icons;
pub mod query_strings;
