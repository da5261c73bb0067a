//! Networking: wire types for the completion endpoint, the HTTP call, and
//! the per-turn request lifecycle driver.

pub mod api;
pub mod completion;
pub mod types;
