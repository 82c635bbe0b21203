//! State Management
//!
//! Global application state and the price feed.

pub mod global;

pub use global::{provide_global_state, FeedPhase, GlobalState, POLL_INTERVAL_MS};
