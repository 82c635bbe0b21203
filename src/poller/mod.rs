//! Price Poller
//!
//! Refreshes the coin list from a [`PriceSource`] on a fixed interval. Each
//! cycle replaces the previous list wholesale; a failed cycle discards it and
//! records the error until the next tick succeeds.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::market::{Coin, PriceSource};

/// Default refresh interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Status of the price feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedStatus {
    /// No fetch has completed yet
    Loading,
    /// The last fetch succeeded
    Ready,
    /// The last fetch failed with this message
    Failed(String),
}

/// Snapshot of the price feed
#[derive(Debug, Clone)]
pub struct FeedState {
    pub coins: Vec<Coin>,
    pub status: FeedStatus,
    /// When the last successful fetch completed
    pub last_updated: Option<DateTime<Utc>>,
    /// Incremented on every completed fetch, successful or not
    pub generation: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            coins: Vec::new(),
            status: FeedStatus::Loading,
            last_updated: None,
            generation: 0,
        }
    }
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FeedStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Periodically refreshes coin prices
pub struct PricePoller {
    source: Arc<dyn PriceSource>,
    state: Arc<RwLock<FeedState>>,
    interval: Duration,
    updates: watch::Sender<u64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PricePoller {
    /// Create a new poller
    pub fn new(source: Arc<dyn PriceSource>, interval: Duration) -> Self {
        let (updates, _) = watch::channel(0);
        Self {
            source,
            state: Arc::new(RwLock::new(FeedState::default())),
            interval,
            updates,
            task: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current feed snapshot
    pub async fn snapshot(&self) -> FeedState {
        self.state.read().await.clone()
    }

    /// Receiver that sees the generation counter change after each fetch
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.updates.subscribe()
    }

    /// Run one fetch cycle and return the resulting snapshot
    pub async fn poll_once(&self) -> FeedState {
        let result = self.source.fetch_coins().await;

        let snapshot = {
            let mut state = self.state.write().await;
            match result {
                Ok(coins) => {
                    tracing::info!(
                        source = self.source.name(),
                        coins = coins.len(),
                        "Price feed refreshed"
                    );
                    state.coins = coins;
                    state.status = FeedStatus::Ready;
                    state.last_updated = Some(Utc::now());
                }
                Err(e) => {
                    tracing::warn!(source = self.source.name(), error = %e, "Price feed refresh failed");
                    state.coins.clear();
                    state.status = FeedStatus::Failed(e.to_string());
                }
            }
            state.generation += 1;
            state.clone()
        };

        self.updates.send_replace(snapshot.generation);
        snapshot
    }

    /// Start the background poll task
    ///
    /// Fetches immediately, then once per interval. Calling this while a task
    /// is already running is a no-op.
    pub async fn start_background_poll(self: Arc<Self>) {
        let mut task = self.task.lock().await;
        if task.is_some() {
            tracing::debug!("Price poller already running");
            return;
        }

        tracing::info!(
            interval_secs = self.interval.as_secs(),
            source = self.source.name(),
            "Starting price poller"
        );

        let poller = Arc::clone(&self);
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poller.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                poller.poll_once().await;
            }
        }));
    }

    /// Stop the background poll task
    pub async fn stop(&self) {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
            tracing::info!("Price poller stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    /// Replays scripted responses, then keeps failing
    struct ScriptedSource {
        responses: StdMutex<VecDeque<Result<Vec<Coin>, MarketError>>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Coin>, MarketError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: StdMutex::new(responses.into()),
            })
        }
    }

    #[async_trait]
    impl PriceSource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch_coins(&self) -> Result<Vec<Coin>, MarketError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(MarketError::Timeout))
        }
    }

    fn coins(n: usize) -> Vec<Coin> {
        (0..n)
            .map(|i| Coin::new(format!("coin-{i}"), format!("Coin {i}"), format!("c{i}"), i as f64))
            .collect()
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let poller = PricePoller::new(ScriptedSource::new(vec![]), DEFAULT_POLL_INTERVAL);
        let state = poller.snapshot().await;

        assert!(state.is_loading());
        assert!(state.coins.is_empty());
        assert_eq!(state.generation, 0);
    }

    #[tokio::test]
    async fn test_success_replaces_list() {
        let source = ScriptedSource::new(vec![Ok(coins(3)), Ok(coins(2))]);
        let poller = PricePoller::new(source, DEFAULT_POLL_INTERVAL);

        let first = poller.poll_once().await;
        assert_eq!(first.coins.len(), 3);
        assert_eq!(first.status, FeedStatus::Ready);
        assert!(first.last_updated.is_some());

        let second = poller.poll_once().await;
        assert_eq!(second.coins.len(), 2);
        assert_eq!(second.generation, 2);
    }

    #[tokio::test]
    async fn test_failure_discards_list_and_recovers() {
        let source = ScriptedSource::new(vec![
            Ok(coins(3)),
            Err(MarketError::Status { status: 500 }),
            Ok(coins(4)),
        ]);
        let poller = PricePoller::new(source, DEFAULT_POLL_INTERVAL);

        poller.poll_once().await;
        let failed = poller.poll_once().await;
        assert!(failed.coins.is_empty());
        assert_eq!(
            failed.error(),
            Some("Failed to fetch crypto data: server returned 500")
        );
        // The last good timestamp is kept for display
        assert!(failed.last_updated.is_some());

        let recovered = poller.poll_once().await;
        assert_eq!(recovered.status, FeedStatus::Ready);
        assert_eq!(recovered.coins.len(), 4);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_cycle() {
        let poller = PricePoller::new(ScriptedSource::new(vec![Ok(coins(1))]), DEFAULT_POLL_INTERVAL);
        let mut rx = poller.subscribe();

        poller.poll_once().await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_background_poll_fetches_on_interval() {
        let source = ScriptedSource::new(vec![Ok(coins(1)), Ok(coins(2)), Ok(coins(3))]);
        let poller = Arc::new(PricePoller::new(source, Duration::from_secs(30)));
        let mut rx = poller.subscribe();

        Arc::clone(&poller).start_background_poll().await;

        // Immediate first fetch
        rx.changed().await.unwrap();
        assert_eq!(poller.snapshot().await.coins.len(), 1);

        // Next one only after the interval elapses
        tokio::time::advance(Duration::from_secs(30)).await;
        rx.changed().await.unwrap();
        assert_eq!(poller.snapshot().await.coins.len(), 2);

        poller.stop().await;
    }
}
