//! Page state management
//!
//! Contains the single state object every page subsystem shares, and the
//! triggers the page reacts to.

use crate::config::Config;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::counter::Counter;
use crate::effects::{Effects, Section, SectionReveal, visible_sections};
use crate::elements::{ElementId, Page};
use crate::events::{Event, EventType, Source};
use crate::feed::DonationFeed;
use crate::logging::LogLevel;
use crate::overlay::{ModalAction, Toasts, TradeModal};
use crate::random::RandomSource;
use crate::voting::{CharityKey, VotingTally};

use std::collections::{HashMap, VecDeque};
use std::fmt::{Debug, Formatter};
use std::time::Instant;

/// Something the viewer (or the feed timer) did to the page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trigger {
    OpenTradeModal,
    ScrollToFeed,
    RefreshFeed,
    TogglePause,
    Vote(CharityKey),
    Modal(ModalAction),
    StickerHover(Option<usize>),
    StickerClick(usize),
    CardEnter,
    CardLeave,
    ScrollUp,
    ScrollDown,
    FeedTick,
}

impl Trigger {
    /// The control the trigger is bound to, if it needs one on the page.
    pub fn control(&self) -> Option<ElementId> {
        match self {
            Trigger::OpenTradeModal => Some(ElementId::TradeBtn),
            Trigger::ScrollToFeed => Some(ElementId::FeedBtn),
            Trigger::RefreshFeed => Some(ElementId::RefreshFeed),
            Trigger::TogglePause => Some(ElementId::PauseFeed),
            Trigger::Vote(charity) => Some(charity.button_element()),
            Trigger::StickerHover(_) | Trigger::StickerClick(_) => Some(ElementId::Stickers),
            Trigger::CardEnter | Trigger::CardLeave => Some(ElementId::SbtCard),
            Trigger::Modal(_) | Trigger::ScrollUp | Trigger::ScrollDown | Trigger::FeedTick => None,
        }
    }
}

/// All mock state of one page view.
pub struct PageState {
    /// Element slots the page renders from.
    pub page: Page,
    /// Rolling donation feed, newest first.
    pub feed: DonationFeed,
    /// Vote counts and the viewer's remaining voting power.
    pub tally: VotingTally,
    /// Live toast notifications.
    pub toasts: Toasts,
    /// The trade modal, while open.
    pub modal: Option<TradeModal>,
    /// Hover and click micro-animations.
    pub effects: Effects,
    /// Sections that have scrolled into view.
    pub reveal: SectionReveal,
    /// Whether the feed timer is ignored.
    pub feed_paused: bool,
    /// Index of the first visible section.
    pub scroll: usize,
    /// Rows available to page sections.
    pub viewport_rows: u16,
    /// Whether to paint the page background
    pub with_background_color: bool,
    /// When the page was loaded; set again by [`PageState::load`].
    pub start_time: Instant,
    /// Frame counter
    pub tick: usize,

    /// Running counter animations by display target.
    pub(super) counters: HashMap<ElementId, Counter>,
    /// Feed stats show live values once the feed has been mutated.
    pub(super) feed_stats_live: bool,
    pub(super) rng: Box<dyn RandomSource>,
    /// Events waiting to be processed
    pub(super) pending_events: VecDeque<Event>,
    /// Recent page activity, oldest first.
    activity: VecDeque<Event>,
}

impl Debug for PageState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageState")
            .field("feed_len", &self.feed.len())
            .field("tally", &self.tally)
            .field("toasts", &self.toasts.len())
            .field("modal_open", &self.modal.is_some())
            .field("feed_paused", &self.feed_paused)
            .field("scroll", &self.scroll)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl PageState {
    /// Build the page state without running any load-time behavior; see
    /// [`PageState::load`].
    pub fn new(config: &Config, rng: Box<dyn RandomSource>, now: Instant) -> Self {
        Self {
            page: Page::without(&config.hidden_elements),
            feed: DonationFeed::default(),
            tally: VotingTally::new(config.voting_power),
            toasts: Toasts::default(),
            modal: None,
            effects: Effects::default(),
            reveal: SectionReveal::default(),
            feed_paused: false,
            scroll: 0,
            viewport_rows: u16::MAX,
            with_background_color: config.with_background_color,
            start_time: now,
            tick: 0,
            counters: HashMap::new(),
            feed_stats_live: false,
            rng,
            pending_events: VecDeque::new(),
            activity: VecDeque::new(),
        }
    }

    /// Sections currently inside the viewport.
    pub fn visible_sections(&self) -> Vec<Section> {
        visible_sections(self.scroll, self.viewport_rows)
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Record page activity with a size limit.
    pub(super) fn record(&mut self, source: Source, msg: String, event_type: EventType, log_level: LogLevel) {
        match log_level {
            LogLevel::Error => log::error!("{}: {}", source, msg),
            LogLevel::Warn => log::warn!("{}: {}", source, msg),
            LogLevel::Info => log::info!("{}: {}", source, msg),
            LogLevel::Debug | LogLevel::Trace => log::debug!("{}: {}", source, msg),
        }
        if self.activity.len() >= MAX_ACTIVITY_LOGS {
            self.activity.pop_front();
        }
        self.activity
            .push_back(Event::new(source, msg, event_type, log_level));
    }

    /// Take all recorded activity, oldest first.
    pub fn drain_activity(&mut self) -> Vec<Event> {
        self.activity.drain(..).collect()
    }
}

#[cfg(test)]
impl PageState {
    pub fn has_running_counter(&self, id: ElementId) -> bool {
        self.counters.contains_key(&id)
    }

    pub fn feed_stats_live(&self) -> bool {
        self.feed_stats_live
    }

    pub fn activity(&self) -> impl Iterator<Item = &Event> {
        self.activity.iter()
    }
}
