//! Wire types shared between the monitoring console UI and the backend service.

pub mod jvm;
pub mod transaction;
