//! Session setup and initialization

use crate::config::Config;
use crate::events::Event;
use crate::random::SeededRandom;
use crate::runtime::start_feed_ticker;
use crate::ui::page::PageState;
use std::error::Error;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for feed timer events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for background tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all background tasks
    pub shutdown_sender: broadcast::Sender<()>,
    /// The page, not yet loaded
    pub state: Box<PageState>,
    /// Resolved configuration
    pub config: Config,
}

/// Sets up a page session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Seeds the mock data source
/// 2. Sets up shutdown channel
/// 3. Starts the feed timer
/// 4. Returns session data for mode-specific handling
///
/// Must be called from within a tokio runtime.
///
/// # Arguments
/// * `config` - Resolved configuration
/// * `max_ticks` - Optional number of feed timer ticks before the timer stops
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The configuration cannot drive a session
pub fn setup_session(config: Config, max_ticks: Option<u64>) -> Result<SessionData, Box<dyn Error>> {
    if config.feed_interval_ms == 0 {
        return Err(Box::from("feed_interval_ms must be greater than zero"));
    }

    let rng = SeededRandom::new(config.seed);
    let state = PageState::new(&config, Box::new(rng), Instant::now());

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, ticker_handle) = start_feed_ticker(
        Duration::from_millis(config.feed_interval_ms),
        shutdown_sender.subscribe(),
        max_ticks,
    );

    Ok(SessionData {
        event_receiver,
        join_handles: vec![ticker_handle],
        shutdown_sender,
        state: Box::new(state),
        config,
    })
}
