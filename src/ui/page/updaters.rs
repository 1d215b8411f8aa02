//! Page state update logic
//!
//! Every handler mutates the state fully and then runs the render pass for
//! what it touched, before returning to the UI loop.

use super::state::{PageState, Trigger};

use crate::consts::cli_consts::feed;
use crate::counter::Counter;
use crate::effects::{STICKERS, Section};
use crate::elements::ElementId;
use crate::error::PageError;
use crate::events::{EventType, Source};
use crate::format::{format_cents, format_currency, format_number};
use crate::logging::LogLevel;
use crate::overlay::{ModalAction, Severity, TradeModal};
use crate::voting::CharityKey;

use chrono::Local;
use std::time::{Duration, Instant};

/// Counters started on page load: target, end value, duration (ms), prefix.
const STARTUP_COUNTERS: [(ElementId, f64, u64, &str); 6] = [
    (ElementId::TotalDonated, 125_000.0, 2_000, "$"),
    (ElementId::ActiveUsers, 2_847.0, 1_500, ""),
    (ElementId::CharitiesHelped, 12.0, 1_000, ""),
    (ElementId::TodayDonations, 15_420.0, 2_500, "$"),
    (ElementId::TotalTransactions, 1_247.0, 2_000, ""),
    (ElementId::AvgDonation, 12.35, 1_500, "$"),
];

const FEED_STAT_ELEMENTS: [ElementId; 3] = [
    ElementId::TodayDonations,
    ElementId::TotalTransactions,
    ElementId::AvgDonation,
];

impl PageState {
    /// Page load: start the counters, seed the feed and the voting tally.
    pub fn load(&mut self, now: Instant) {
        self.start_time = now;
        for (id, end, millis, prefix) in STARTUP_COUNTERS {
            self.animate_counter(id, 0.0, end, Duration::from_millis(millis), prefix, now);
        }

        self.feed
            .generate_entries(feed::INITIAL_ENTRIES, self.rng.as_mut(), Local::now());
        self.render_feed();

        self.tally.initialize(self.rng.as_mut());
        self.render_voting();
        self.render_pause_control();

        // Sections are revealed by the first resize or frame, once the
        // viewport is known.
        self.record(
            Source::Feed,
            format!("Page loaded with {} donations", self.feed.len()),
            EventType::StateChange,
            LogLevel::Info,
        );
    }

    /// Advance one frame: apply queued timer events, step animations and
    /// expire overlays.
    pub fn update(&mut self, now: Instant) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            if event.is_tick() {
                let _ = self.dispatch(Trigger::FeedTick, now);
            }
        }

        self.animate_frame(now);
        self.toasts.prune(now);
        self.effects.prune(now);
        let visible = self.visible_sections();
        self.reveal.observe(&visible, now);
    }

    /// Set the rows available to page sections (terminal resize).
    pub fn resize(&mut self, rows: u16, now: Instant) {
        self.viewport_rows = rows;
        let visible = self.visible_sections();
        self.reveal.observe(&visible, now);
    }

    /// Run the handler for `trigger`.
    ///
    /// Triggers bound to a control that is not on the page are skipped with
    /// [`PageError::MissingElement`]. Rejections are returned after they have
    /// been surfaced to the viewer.
    pub fn dispatch(&mut self, trigger: Trigger, now: Instant) -> Result<(), PageError> {
        if let Some(control) = trigger.control() {
            if let Err(e) = self.page.require(control) {
                log::debug!("Skipping {:?}: {}", trigger, e);
                return Err(e);
            }
        }

        match trigger {
            Trigger::OpenTradeModal => self.open_trade_modal(now),
            Trigger::Modal(action) => self.modal_action(action),
            Trigger::ScrollToFeed => self.scroll_to(Section::Feed, now),
            Trigger::ScrollUp => self.scroll_to_index(self.scroll.saturating_sub(1), now),
            Trigger::ScrollDown => self.scroll_to_index(self.scroll + 1, now),
            Trigger::RefreshFeed => self.refresh_feed(),
            Trigger::TogglePause => self.toggle_feed_pause(now),
            Trigger::FeedTick => self.feed_tick(),
            Trigger::Vote(charity) => return self.cast_vote(charity, now),
            Trigger::StickerHover(index) => self.effects.hover_sticker(index),
            Trigger::StickerClick(index) => self.effects.click_sticker(index, now),
            Trigger::CardEnter => self.effects.card_enter(now),
            Trigger::CardLeave => self.effects.card_leave(),
        }
        Ok(())
    }

    /// Show a toast notification.
    pub fn notify(&mut self, message: &str, severity: Severity, now: Instant) -> u64 {
        let id = self.toasts.notify(message, severity, now);
        self.record(
            Source::Overlay,
            format!("Toast ({}): {}", severity, message),
            EventType::StateChange,
            LogLevel::Debug,
        );
        id
    }

    /// Vote for a charity by its key, as the vote controls carry it.
    pub fn cast_vote_by_key(&mut self, key: &str, now: Instant) -> Result<(), PageError> {
        match key.parse::<CharityKey>() {
            Ok(charity) => self.dispatch(Trigger::Vote(charity), now),
            Err(e) => {
                self.record(Source::Voting, e.to_string(), EventType::Error, LogLevel::Warn);
                Err(e)
            }
        }
    }

    fn cast_vote(&mut self, charity: CharityKey, now: Instant) -> Result<(), PageError> {
        match self.tally.cast_vote(charity) {
            Ok(()) => {
                self.render_voting();
                let message = format!("Vote cast for {}!", charity.display_name());
                self.notify(&message, Severity::Success, now);
                self.effects.press_vote(charity, now);
                self.record(Source::Voting, message, EventType::Success, LogLevel::Info);
                Ok(())
            }
            Err(e) => {
                self.notify(&e.to_string(), Severity::Error, now);
                self.record(Source::Voting, e.to_string(), EventType::Error, LogLevel::Warn);
                Err(e)
            }
        }
    }

    fn open_trade_modal(&mut self, now: Instant) {
        if self.modal.is_some() {
            return;
        }
        self.modal = Some(TradeModal { opened_at: now });
        self.record(
            Source::Overlay,
            "Trade modal opened".to_string(),
            EventType::StateChange,
            LogLevel::Debug,
        );
    }

    fn modal_action(&mut self, action: ModalAction) {
        if self.modal.take().is_some() {
            self.record(
                Source::Overlay,
                format!("Trade modal dismissed ({})", action),
                EventType::StateChange,
                LogLevel::Debug,
            );
        }
    }

    fn scroll_to(&mut self, section: Section, now: Instant) {
        self.scroll_to_index(section.index(), now);
    }

    fn scroll_to_index(&mut self, index: usize, now: Instant) {
        self.scroll = index.min(Section::ALL.len() - 1);
        let visible = self.visible_sections();
        self.reveal.observe(&visible, now);
    }

    fn refresh_feed(&mut self) {
        self.feed
            .generate_entries(feed::REFRESH_ENTRIES, self.rng.as_mut(), Local::now());
        self.feed_stats_live = true;
        self.render_feed();
        self.render_feed_stats();
        self.record(
            Source::Feed,
            format!("Feed refreshed, {} donations shown", self.feed.len()),
            EventType::Refresh,
            LogLevel::Info,
        );
    }

    fn toggle_feed_pause(&mut self, now: Instant) {
        self.feed_paused = !self.feed_paused;
        self.render_pause_control();
        let msg = if self.feed_paused {
            "Feed updates paused"
        } else {
            "Feed updates resumed"
        };
        self.notify(msg, Severity::Info, now);
        self.record(Source::Feed, msg.to_string(), EventType::StateChange, LogLevel::Info);
    }

    fn feed_tick(&mut self) {
        if self.feed_paused {
            log::trace!("Feed paused, skipping tick");
            return;
        }
        let entry = self.feed.add_one(self.rng.as_mut(), Local::now());
        let msg = format!(
            "{} donated {} to {}",
            entry.user,
            format_cents(entry.amount_cents),
            entry.charity
        );
        self.feed_stats_live = true;
        self.render_feed();
        self.render_feed_stats();
        self.record(Source::Feed, msg, EventType::Success, LogLevel::Info);
    }

    /// Restart the counter animation on `id`. No-op when the element is missing.
    pub fn animate_counter(
        &mut self,
        id: ElementId,
        start: f64,
        end: f64,
        duration: Duration,
        prefix: &'static str,
        now: Instant,
    ) {
        if let Err(e) = self.page.require(id) {
            log::debug!("Not animating: {}", e);
            return;
        }
        let counter = Counter::new(start, end, duration, prefix, now);
        self.write(id, counter.display(now));
        self.counters.insert(id, counter);
    }

    fn animate_frame(&mut self, now: Instant) {
        let frames: Vec<(ElementId, String, bool)> = self
            .counters
            .iter()
            .map(|(id, counter)| (*id, counter.display(now), counter.is_finished(now)))
            .collect();
        for (id, text, finished) in frames {
            self.write(id, text);
            if finished {
                self.counters.remove(&id);
            }
        }
    }

    fn write(&mut self, id: ElementId, text: impl Into<String>) {
        if let Err(e) = self.page.set_text(id, text) {
            log::trace!("{}", e);
        }
    }

    fn render_feed(&mut self) {
        if let Err(e) = self.page.require(ElementId::DonationFeed) {
            log::trace!("{}", e);
            return;
        }
        let label = format!("{} donations", self.feed.len());
        self.write(ElementId::DonationFeed, label);
    }

    fn render_feed_stats(&mut self) {
        if !self.feed_stats_live {
            return;
        }
        for id in FEED_STAT_ELEMENTS {
            self.counters.remove(&id);
        }
        let stats = self.feed.stats();
        self.write(ElementId::TodayDonations, format_cents(stats.total_cents));
        self.write(ElementId::TotalTransactions, format_number(stats.count as u64));
        self.write(ElementId::AvgDonation, format_currency(stats.average()));
    }

    fn render_voting(&mut self) {
        self.write(ElementId::TotalVotes, format_number(self.tally.total_votes()));
        self.write(
            ElementId::UserVotingPower,
            format!("{} STKR", format_number(self.tally.voting_power())),
        );
        for charity in CharityKey::ALL {
            let percentage = self.tally.percentage(charity);
            self.write(charity.votes_element(), format_number(self.tally.votes(charity)));
            self.write(charity.percentage_element(), format!("{:.1}%", percentage));
            if let Err(e) = self.page.set_width(charity.progress_element(), percentage) {
                log::trace!("{}", e);
            }
        }
    }

    fn render_pause_control(&mut self) {
        let label = if self.feed_paused {
            "Resume Updates"
        } else {
            "Pause Updates"
        };
        self.write(ElementId::PauseFeed, label);
        if let Err(e) = self.page.set_highlighted(ElementId::PauseFeed, self.feed_paused) {
            log::trace!("{}", e);
        }
    }

    /// Hover the next (or previous) sticker, wrapping around.
    pub fn cycle_sticker_hover(&mut self, forward: bool, now: Instant) -> Result<(), PageError> {
        let len = STICKERS.len();
        let next = match (self.effects.hovered_sticker(), forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.dispatch(Trigger::StickerHover(Some(next)), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::Event;
    use crate::overlay::ToastPhase;
    use crate::random::SeededRandom;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn loaded(config: Config, t0: Instant) -> PageState {
        let mut state = PageState::new(&config, Box::new(SeededRandom::from_seed(11)), t0);
        state.load(t0);
        state
    }

    fn with_power(voting_power: u64) -> Config {
        Config {
            voting_power,
            ..Config::default()
        }
    }

    fn text(state: &PageState, id: ElementId) -> String {
        state.page.text(id).unwrap_or_default().to_string()
    }

    #[test]
    fn load_seeds_feed_tally_and_counters() {
        let t0 = Instant::now();
        let state = loaded(Config::default(), t0);

        assert_eq!(state.feed.len(), 5);
        let sum: u64 = CharityKey::ALL.iter().map(|c| state.tally.votes(*c)).sum();
        assert_eq!(state.tally.total_votes(), sum);
        assert_eq!(text(&state, ElementId::TotalVotes), format_number(sum));
        assert_eq!(text(&state, ElementId::UserVotingPower), "1,000 STKR");
        assert_eq!(text(&state, ElementId::TotalDonated), "$0");
        assert!(state.has_running_counter(ElementId::AvgDonation));
        assert_eq!(text(&state, ElementId::PauseFeed), "Pause Updates");
    }

    #[test]
    fn load_into_a_short_viewport_reveals_only_what_fits() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        assert!(Section::ALL.iter().all(|s| !state.reveal.is_revealed(*s)));

        state.resize(Section::Hero.height(), t0);
        assert!(state.reveal.is_revealed(Section::Hero));
        assert!(!state.reveal.is_revealed(Section::Feed));
        assert!(!state.reveal.is_revealed(Section::Membership));

        state.update(t0 + ms(33));
        assert!(!state.reveal.is_revealed(Section::Membership));
    }

    #[test]
    fn counters_land_on_their_targets() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        state.update(t0 + ms(1_000));
        assert_eq!(text(&state, ElementId::CharitiesHelped), "12");
        assert!(!state.has_running_counter(ElementId::CharitiesHelped));

        state.update(t0 + ms(2_500));
        assert_eq!(text(&state, ElementId::TotalDonated), "$125,000");
        assert_eq!(text(&state, ElementId::ActiveUsers), "2,847");
        assert_eq!(text(&state, ElementId::TodayDonations), "$15,420");
        assert_eq!(text(&state, ElementId::TotalTransactions), "1,247");
        assert_eq!(text(&state, ElementId::AvgDonation), "$12.35");
        assert!(STARTUP_COUNTERS.iter().all(|(id, ..)| !state.has_running_counter(*id)));
    }

    #[test]
    fn restarting_a_counter_starts_over() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        state.update(t0 + ms(3_000));
        state.animate_counter(ElementId::ActiveUsers, 100.0, 200.0, ms(1_000), "", t0 + ms(3_000));
        assert_eq!(text(&state, ElementId::ActiveUsers), "100");
        state.update(t0 + ms(4_000));
        assert_eq!(text(&state, ElementId::ActiveUsers), "200");
    }

    #[test]
    fn feed_tick_inserts_and_goes_live() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        state.add_event(Event::feed_tick());
        state.update(t0 + ms(100));

        assert_eq!(state.feed.len(), 6);
        assert_eq!(state.feed.entries().next().unwrap().seconds_ago, 0);
        assert!(state.feed_stats_live());
        assert!(!state.has_running_counter(ElementId::TodayDonations));

        let stats = state.feed.stats();
        assert_eq!(text(&state, ElementId::TodayDonations), format_cents(stats.total_cents));
        assert_eq!(text(&state, ElementId::TotalTransactions), "6");
        assert_eq!(text(&state, ElementId::AvgDonation), format_currency(stats.average()));

        // The placeholder animation must not come back.
        state.update(t0 + ms(2_500));
        assert_eq!(text(&state, ElementId::TotalTransactions), "6");
    }

    #[test]
    fn paused_feed_ignores_ticks() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        state.dispatch(Trigger::TogglePause, t0).unwrap();
        assert_eq!(text(&state, ElementId::PauseFeed), "Resume Updates");
        assert!(state.page.slot(ElementId::PauseFeed).unwrap().highlighted);
        let toast = state.toasts.iter().last().unwrap();
        assert_eq!(toast.message, "Feed updates paused");
        assert_eq!(toast.severity, Severity::Info);

        state.dispatch(Trigger::FeedTick, t0).unwrap();
        assert_eq!(state.feed.len(), 5);

        state.dispatch(Trigger::TogglePause, t0).unwrap();
        assert_eq!(text(&state, ElementId::PauseFeed), "Pause Updates");
        state.dispatch(Trigger::FeedTick, t0).unwrap();
        assert_eq!(state.feed.len(), 6);
    }

    #[test]
    fn refresh_on_a_full_feed_stays_at_capacity() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        for _ in 0..20 {
            state.dispatch(Trigger::FeedTick, t0).unwrap();
        }
        assert_eq!(state.feed.len(), 20);
        state.dispatch(Trigger::RefreshFeed, t0).unwrap();
        assert_eq!(state.feed.len(), 20);
        assert_eq!(text(&state, ElementId::TotalTransactions), "20");
    }

    #[test]
    fn vote_with_power_five() {
        let t0 = Instant::now();
        let mut state = loaded(with_power(5), t0);
        let before = state.tally.clone();

        state.dispatch(Trigger::Vote(CharityKey::Unicef), t0).unwrap();

        assert_eq!(state.tally.votes(CharityKey::Unicef), before.votes(CharityKey::Unicef) + 1);
        assert_eq!(state.tally.total_votes(), before.total_votes() + 1);
        assert_eq!(state.tally.voting_power(), 4);
        assert_eq!(text(&state, ElementId::UserVotingPower), "4 STKR");
        assert_eq!(
            text(&state, ElementId::UnicefPercentage),
            format!("{:.1}%", state.tally.percentage(CharityKey::Unicef))
        );
        let toast = state.toasts.iter().last().unwrap();
        assert_eq!(toast.message, "Vote cast for UNICEF!");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn vote_without_power_is_rejected_with_a_toast() {
        let t0 = Instant::now();
        let mut state = loaded(with_power(0), t0);
        let before = state.tally.clone();

        let result = state.dispatch(Trigger::Vote(CharityKey::Doctors), t0);

        assert_eq!(result, Err(PageError::InsufficientPower));
        assert_eq!(state.tally, before);
        let toast = state.toasts.iter().last().unwrap().clone();
        assert_eq!(toast.message, "Insufficient voting power!");
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.phase(t0), ToastPhase::Visible);

        state.update(t0 + ms(3_300));
        assert!(state.toasts.iter().all(|t| t.id != toast.id));
    }

    #[test]
    fn unknown_charity_keys_are_rejected() {
        let t0 = Instant::now();
        let mut state = loaded(with_power(5), t0);
        let result = state.cast_vote_by_key("wildlife", t0);
        assert_eq!(result, Err(PageError::UnknownCharity("wildlife".to_string())));
        assert_eq!(state.tally.voting_power(), 5);
        assert!(state.cast_vote_by_key("doctors", t0).is_ok());
    }

    #[test]
    fn missing_elements_are_skipped() {
        let t0 = Instant::now();
        let config = Config {
            hidden_elements: vec![ElementId::TotalVotes, ElementId::UnicefVote, ElementId::TotalDonated],
            ..with_power(5)
        };
        let mut state = loaded(config, t0);
        assert!(!state.has_running_counter(ElementId::TotalDonated));

        assert_eq!(
            state.dispatch(Trigger::Vote(CharityKey::Unicef), t0),
            Err(PageError::MissingElement(ElementId::UnicefVote))
        );
        assert_eq!(state.tally.voting_power(), 5);

        state.dispatch(Trigger::Vote(CharityKey::Doctors), t0).unwrap();
        assert_eq!(state.tally.voting_power(), 4);
        assert!(state.page.text(ElementId::TotalVotes).is_none());
    }

    #[test]
    fn trade_modal_is_single_and_every_action_dismisses_it() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        for action in [
            ModalAction::ConnectWallet,
            ModalAction::LearnMore,
            ModalAction::Close,
            ModalAction::Backdrop,
        ] {
            state.dispatch(Trigger::OpenTradeModal, t0).unwrap();
            state.dispatch(Trigger::OpenTradeModal, t0 + ms(5)).unwrap();
            assert_eq!(state.modal, Some(TradeModal { opened_at: t0 }));
            state.dispatch(Trigger::Modal(action), t0).unwrap();
            assert!(state.modal.is_none());
        }
    }

    #[test]
    fn scroll_to_feed_reveals_it() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        state.resize(Section::Hero.height(), t0);
        assert!(!state.reveal.is_revealed(Section::Feed));

        state.dispatch(Trigger::ScrollToFeed, t0 + ms(50)).unwrap();
        assert_eq!(state.scroll, Section::Feed.index());
        assert!(state.reveal.is_revealed(Section::Feed));

        state.dispatch(Trigger::ScrollUp, t0 + ms(60)).unwrap();
        assert_eq!(state.scroll, 0);
        for _ in 0..10 {
            state.dispatch(Trigger::ScrollDown, t0).unwrap();
        }
        assert_eq!(state.scroll, Section::ALL.len() - 1);
    }

    #[test]
    fn sticker_hover_wraps() {
        let t0 = Instant::now();
        let mut state = loaded(Config::default(), t0);
        state.cycle_sticker_hover(false, t0).unwrap();
        assert_eq!(state.effects.hovered_sticker(), Some(STICKERS.len() - 1));
        state.cycle_sticker_hover(true, t0).unwrap();
        assert_eq!(state.effects.hovered_sticker(), Some(0));
    }

    #[test]
    fn activity_is_recorded() {
        let t0 = Instant::now();
        let mut state = loaded(with_power(1), t0);
        state.dispatch(Trigger::Vote(CharityKey::Environment), t0).unwrap();
        let _ = state.dispatch(Trigger::Vote(CharityKey::Environment), t0);
        let messages: Vec<String> = state.drain_activity().into_iter().map(|e| e.msg).collect();
        assert!(messages.contains(&"Vote cast for Environmental Defense Fund!".to_string()));
        assert!(messages.contains(&"Insufficient voting power!".to_string()));
        assert_eq!(state.activity().count(), 0);
    }
}
