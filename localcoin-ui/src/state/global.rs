//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use localcoin::market::Coin;

use crate::api;

/// How often the crypto view refetches prices
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Latest coin list; replaced wholesale on every refresh
    pub coins: RwSignal<Vec<Coin>>,
    /// True until the first fetch completes
    pub loading: RwSignal<bool>,
    /// Error from the last fetch, if it failed
    pub error: RwSignal<Option<String>>,
    /// Time of the last successful fetch (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
}

/// Which state the crypto view is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Loading,
    Failed,
    Ready,
}

impl FeedPhase {
    /// Loading wins until the first response arrives; after that a failure
    /// hides the table.
    pub fn from_flags(loading: bool, failed: bool) -> Self {
        if loading {
            FeedPhase::Loading
        } else if failed {
            FeedPhase::Failed
        } else {
            FeedPhase::Ready
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        coins: create_rw_signal(Vec::new()),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        last_refresh: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn phase(&self) -> FeedPhase {
        FeedPhase::from_flags(self.loading.get(), self.error.get().is_some())
    }

    /// Fetch prices and replace the coin list
    pub fn refresh_coins(&self) {
        let state = *self;
        spawn_local(async move {
            match api::fetch_coins().await {
                Ok(coins) => {
                    state.coins.set(coins);
                    state.error.set(None);
                    state
                        .last_refresh
                        .set(Some(chrono::Utc::now().timestamp_millis()));
                }
                Err(e) => {
                    web_sys::console::error_1(&e.clone().into());
                    state.coins.set(Vec::new());
                    state.error.set(Some(e));
                }
            }
            state.loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_phase() {
        assert_eq!(FeedPhase::from_flags(true, false), FeedPhase::Loading);
        assert_eq!(FeedPhase::from_flags(true, true), FeedPhase::Loading);
        assert_eq!(FeedPhase::from_flags(false, true), FeedPhase::Failed);
        assert_eq!(FeedPhase::from_flags(false, false), FeedPhase::Ready);
    }
}
