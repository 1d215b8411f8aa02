//! Event System
//!
//! Events flowing from the feed timer into the UI loop, and the activity the
//! page records about itself.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The repeating timer that grows the donation feed.
    FeedTimer,
    /// Donation feed mutations.
    Feed,
    /// The voting widget.
    Voting,
    /// Modal and toast overlays.
    Overlay,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A timer tick; consumed by the UI loop, never displayed.
    Tick,
    Success,
    Error,
    Refresh,
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn feed_tick() -> Self {
        Self::new(
            Source::FeedTimer,
            "Feed timer fired".to_string(),
            EventType::Tick,
            LogLevel::Trace,
        )
    }

    pub fn is_tick(&self) -> bool {
        self.event_type == EventType::Tick
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Tick {
            return false;
        }
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}
