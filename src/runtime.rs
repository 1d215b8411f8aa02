//! Feed timer task
//!
//! The timer never touches page state. It only signals the UI loop, which
//! owns the state and applies the mutation itself.

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval_at};

/// Spawn the repeating feed timer.
///
/// Ticks every `period` until a shutdown signal arrives, the receiver is
/// dropped, or `max_ticks` ticks have been sent. The channel closes when the
/// task ends.
pub fn start_feed_ticker(
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
    max_ticks: Option<u64>,
) -> (mpsc::Receiver<Event>, JoinHandle<()>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let handle = tokio::spawn(async move {
        let start = tokio::time::Instant::now() + period;
        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sent: u64 = 0;

        loop {
            if max_ticks.is_some_and(|max| sent >= max) {
                log::debug!("Feed timer reached its tick limit ({})", sent);
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {
                    if event_sender.send(Event::feed_tick()).await.is_err() {
                        break;
                    }
                    sent += 1;
                }
                _ = shutdown.recv() => {
                    log::debug!("Feed timer shutting down");
                    break;
                }
            }
        }
    });

    (event_receiver, handle)
}
