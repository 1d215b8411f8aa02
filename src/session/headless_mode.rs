//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::format::{format_cents, format_currency};
use crate::ui::page::PageState;
use crate::{print_cmd_info, print_cmd_success};
use std::error::Error;
use std::time::Instant;

/// Print recorded page activity that should be shown on the console.
fn print_activity(state: &mut PageState) {
    for event in state.drain_activity() {
        if event.should_display() {
            println!("{}", event);
        }
    }
}

/// Votes spent this session next to the tally total, which includes the
/// baseline votes.
fn votes_summary(state: &PageState, initial_power: u64) -> String {
    let spent = initial_power.saturating_sub(state.tally.voting_power());
    format!("{} cast, {} total votes", spent, state.tally.total_votes())
}

/// Runs the page in headless mode
///
/// This function handles:
/// 1. Loading the page and driving it from the feed timer
/// 2. Console activity logging
/// 3. Ctrl+C shutdown handling
///
/// The loop ends on Ctrl+C, or once the feed timer stops on its own after
/// `--max-ticks`.
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(
        "headless",
        session.config.seed,
        session.config.feed_interval_ms,
    );

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let state = session.state.as_mut();
    state.load(Instant::now());
    print_activity(state);

    // Event loop: apply feed ticks and log activity until shutdown
    loop {
        tokio::select! {
            event = session.event_receiver.recv() => {
                match event {
                    Some(event) => {
                        state.add_event(event);
                        state.update(Instant::now());
                        print_activity(state);
                    }
                    // Feed timer finished
                    None => break,
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    let stats = state.feed.stats();
    print_cmd_info!(
        "Feed summary",
        "{} donations, {} total, {} average",
        stats.count,
        format_cents(stats.total_cents),
        format_currency(stats.average())
    );
    print_cmd_success!("Votes", "{}", votes_summary(state, session.config.voting_power));

    // Wait for background tasks to finish
    print_session_shutdown();
    let _ = session.shutdown_sender.send(());
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
