pub mod jvm;
pub mod misc;
pub mod transaction;
