//! Simulated donation feed.

use crate::consts::cli_consts::feed;
use crate::random::{self, RandomSource};
use chrono::{DateTime, Duration as ChronoDuration, Local};
use std::collections::VecDeque;

/// A charity donations can be made to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Charity {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

pub const CHARITIES: [Charity; 5] = [
    Charity {
        name: "UNICEF",
        icon: "🌍",
        category: "Children",
    },
    Charity {
        name: "Doctors Without Borders",
        icon: "🏥",
        category: "Medical",
    },
    Charity {
        name: "Environmental Defense Fund",
        icon: "🌱",
        category: "Environment",
    },
    Charity {
        name: "Red Cross",
        icon: "❤️",
        category: "Emergency",
    },
    Charity {
        name: "World Food Programme",
        icon: "🍽️",
        category: "Hunger",
    },
];

/// Handles used for backfilled entries.
pub const BACKFILL_HANDLES: [&str; 4] = ["0x1234...5678", "0xabcd...efgh", "0x9876...5432", "0xdcba...hgfe"];

/// Handles used for live entries.
pub const LIVE_HANDLES: [&str; 5] = [
    "0x1234...5678",
    "0xabcd...efgh",
    "0x9876...5432",
    "0xdcba...hgfe",
    "0x1111...2222",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DonationEntry {
    pub charity: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub user: &'static str,
    pub amount_cents: u64,
    pub seconds_ago: u64,
    pub timestamp: DateTime<Local>,
}

impl DonationEntry {
    fn generate(
        rng: &mut dyn RandomSource,
        handles: &'static [&'static str],
        seconds_ago: Option<u64>,
        now: DateTime<Local>,
    ) -> Self {
        let charity = random::pick(rng, &CHARITIES);
        let user = *random::pick(rng, handles);
        let amount_cents = random::below(rng, feed::MIN_AMOUNT_CENTS, feed::AMOUNT_SPAN_CENTS);
        let seconds_ago =
            seconds_ago.unwrap_or_else(|| random::below(rng, 1, feed::MAX_SECONDS_AGO));
        Self {
            charity: charity.name,
            icon: charity.icon,
            category: charity.category,
            user,
            amount_cents,
            seconds_ago,
            timestamp: now - ChronoDuration::seconds(seconds_ago as i64),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// "Just now" for live entries, otherwise "Ns ago".
    pub fn age_label(&self) -> String {
        if self.seconds_ago == 0 {
            "Just now".to_string()
        } else {
            format!("{}s ago", self.seconds_ago)
        }
    }
}

/// Aggregates over the visible feed window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedStats {
    pub total_cents: u64,
    pub count: usize,
}

impl FeedStats {
    pub fn total(&self) -> f64 {
        self.total_cents as f64 / 100.0
    }

    /// Mean donation; 0 for an empty feed.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total() / self.count as f64
        }
    }
}

/// Bounded, newest-first sequence of donations.
#[derive(Debug, Clone)]
pub struct DonationFeed {
    entries: VecDeque<DonationEntry>,
    capacity: usize,
}

impl Default for DonationFeed {
    fn default() -> Self {
        Self::with_capacity(feed::CAPACITY)
    }
}

impl DonationFeed {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Generate `count` backfilled donations with a random age in [1, 60] s.
    pub fn generate_entries(
        &mut self,
        count: usize,
        rng: &mut dyn RandomSource,
        now: DateTime<Local>,
    ) {
        for _ in 0..count {
            let entry = DonationEntry::generate(rng, &BACKFILL_HANDLES, None, now);
            self.entries.push_front(entry);
        }
        self.enforce_capacity();
    }

    /// Insert one live donation at the front and return it.
    pub fn add_one(&mut self, rng: &mut dyn RandomSource, now: DateTime<Local>) -> &DonationEntry {
        let entry = DonationEntry::generate(rng, &LIVE_HANDLES, Some(0), now);
        self.entries.push_front(entry);
        self.enforce_capacity();
        &self.entries[0]
    }

    fn enforce_capacity(&mut self) {
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &DonationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> FeedStats {
        FeedStats {
            total_cents: self.entries.iter().map(|e| e.amount_cents).sum(),
            count: self.entries.len(),
        }
    }
}
