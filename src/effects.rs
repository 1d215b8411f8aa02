//! Cosmetic micro-animations: section reveals, sticker and card hovers,
//! vote button presses.
//!
//! Each effect is a deadline relative to when it was triggered, evaluated at
//! render time, so a revert scheduled for an element that has since gone away
//! simply never shows.

use crate::consts::cli_consts::timing;
use crate::voting::CharityKey;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Decorative stickers shown in the hero section.
pub const STICKERS: [&str; 5] = ["💝", "🌍", "🏥", "🌱", "⭐"];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum Section {
    Hero,
    Feed,
    Voting,
    Membership,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::Feed, Section::Voting, Section::Membership];

    /// Rows the section occupies on the page.
    pub fn height(&self) -> u16 {
        match self {
            Section::Hero => 9,
            Section::Feed => 16,
            Section::Voting => 13,
            Section::Membership => 9,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Feed => 1,
            Section::Voting => 2,
            Section::Membership => 3,
        }
    }
}

/// Sections that fit in `rows` starting at the `scroll`-th one. The first
/// section is always included so a tiny terminal still shows something.
pub fn visible_sections(scroll: usize, rows: u16) -> Vec<Section> {
    let mut visible = Vec::new();
    let mut used: u16 = 0;
    for section in Section::ALL.iter().skip(scroll) {
        let height = section.height();
        if !visible.is_empty() && used.saturating_add(height) > rows {
            break;
        }
        used = used.saturating_add(height);
        visible.push(*section);
    }
    visible
}

/// One-way fade-in of sections as they scroll into view.
#[derive(Debug, Clone, Default)]
pub struct SectionReveal {
    revealed: HashMap<Section, Instant>,
}

impl SectionReveal {
    /// Reveal any of `visible` not yet revealed; returns the newly revealed.
    pub fn observe(&mut self, visible: &[Section], now: Instant) -> Vec<Section> {
        let mut newly = Vec::new();
        for section in visible {
            if !self.is_revealed(*section) {
                self.revealed.insert(*section, now);
                newly.push(*section);
            }
        }
        newly
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains_key(&section)
    }

    /// 0 before the section was seen, rising to 1 over the transition.
    pub fn progress(&self, section: Section, now: Instant) -> f64 {
        match self.revealed.get(&section) {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(*at);
                (elapsed.as_secs_f64() / timing::section_reveal().as_secs_f64()).min(1.0)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StickerStyle {
    Rest,
    /// scale(1.2) rotate(5deg)
    Hovered,
    /// scale(1.5) rotate(360deg) brightness(1.2)
    Spinning { progress: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardStyle {
    Rest,
    /// translateY(-10px) rotateY(5deg), strong shadow
    Lifted,
    /// translateY(-5px), soft shadow
    Raised,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VoteButtonStyle {
    Rest,
    Pressed,
    Highlighted,
}

#[derive(Debug, Clone, Default)]
pub struct Effects {
    hovered_sticker: Option<usize>,
    spins: HashMap<usize, Instant>,
    card_hovered_at: Option<Instant>,
    vote_presses: HashMap<CharityKey, Instant>,
}

fn within(start: Instant, now: Instant, millis: u64) -> bool {
    now.saturating_duration_since(start) < Duration::from_millis(millis)
}

impl Effects {
    pub fn hover_sticker(&mut self, index: Option<usize>) {
        self.hovered_sticker = index.filter(|i| *i < STICKERS.len());
    }

    pub fn hovered_sticker(&self) -> Option<usize> {
        self.hovered_sticker
    }

    pub fn click_sticker(&mut self, index: usize, now: Instant) {
        if index < STICKERS.len() {
            self.spins.insert(index, now);
        }
    }

    pub fn sticker_style(&self, index: usize, now: Instant) -> StickerStyle {
        if let Some(start) = self.spins.get(&index) {
            if within(*start, now, timing::STICKER_SPIN_MS) {
                let elapsed = now.saturating_duration_since(*start).as_secs_f64();
                return StickerStyle::Spinning {
                    progress: elapsed / Duration::from_millis(timing::STICKER_SPIN_MS).as_secs_f64(),
                };
            }
        }
        if self.hovered_sticker == Some(index) {
            StickerStyle::Hovered
        } else {
            StickerStyle::Rest
        }
    }

    /// Start hovering the card. Re-entering restarts the lift.
    pub fn card_enter(&mut self, now: Instant) {
        self.card_hovered_at = Some(now);
    }

    pub fn card_leave(&mut self) {
        self.card_hovered_at = None;
    }

    pub fn card_hovered(&self) -> bool {
        self.card_hovered_at.is_some()
    }

    pub fn card_style(&self, now: Instant) -> CardStyle {
        match self.card_hovered_at {
            None => CardStyle::Rest,
            Some(at) if within(at, now, timing::CARD_LIFT_MS) => CardStyle::Lifted,
            Some(_) => CardStyle::Raised,
        }
    }

    pub fn press_vote(&mut self, charity: CharityKey, now: Instant) {
        self.vote_presses.insert(charity, now);
    }

    pub fn vote_style(&self, charity: CharityKey, now: Instant) -> VoteButtonStyle {
        match self.vote_presses.get(&charity) {
            Some(at) if within(*at, now, timing::VOTE_PRESS_MS) => VoteButtonStyle::Pressed,
            Some(at) if within(*at, now, timing::VOTE_PRESS_MS + timing::VOTE_HIGHLIGHT_MS) => {
                VoteButtonStyle::Highlighted
            }
            _ => VoteButtonStyle::Rest,
        }
    }

    /// Forget timed effects that have run out.
    pub fn prune(&mut self, now: Instant) {
        self.spins
            .retain(|_, start| within(*start, now, timing::STICKER_SPIN_MS));
        self.vote_presses.retain(|_, start| {
            within(*start, now, timing::VOTE_PRESS_MS + timing::VOTE_HIGHLIGHT_MS)
        });
    }
}
