//! Goal-mode fitness dashboard: mode locking, activity reduction and
//! snapshot persistence behind a small CLI.

pub mod core;
pub mod models;
pub mod output;
pub mod store;
