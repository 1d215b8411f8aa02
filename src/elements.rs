//! Page markup: the element identifiers the controller binds to.
//!
//! The markup is the set of elements present on the page. Display targets
//! hold a text slot (and a width for progress bars); controls hold their
//! label. Writes to an element that is not in the markup are rejected with
//! [`PageError::MissingElement`] and callers skip them.

use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ElementId {
    // Hero stats
    TotalDonated,
    ActiveUsers,
    CharitiesHelped,
    // Feed stats
    TodayDonations,
    TotalTransactions,
    AvgDonation,
    // Voting
    UnicefVotes,
    UnicefPercentage,
    UnicefProgress,
    DoctorsVotes,
    DoctorsPercentage,
    DoctorsProgress,
    EnvironmentVotes,
    EnvironmentPercentage,
    EnvironmentProgress,
    TotalVotes,
    UserVotingPower,
    // Containers
    DonationFeed,
    // Controls
    TradeBtn,
    FeedBtn,
    RefreshFeed,
    PauseFeed,
    UnicefVote,
    DoctorsVote,
    EnvironmentVote,
    // Decorative
    SbtCard,
    Stickers,
}

impl ElementId {
    /// Initial content of the element as written in the markup.
    pub fn default_text(&self) -> &'static str {
        match self {
            ElementId::TradeBtn => "Start Trading",
            ElementId::FeedBtn => "View Live Feed",
            ElementId::RefreshFeed => "Refresh",
            ElementId::PauseFeed => "Pause Updates",
            ElementId::UnicefVote | ElementId::DoctorsVote | ElementId::EnvironmentVote => "Vote",
            ElementId::UnicefPercentage
            | ElementId::DoctorsPercentage
            | ElementId::EnvironmentPercentage => "0%",
            ElementId::DonationFeed | ElementId::SbtCard | ElementId::Stickers => "",
            _ => "0",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    pub text: String,
    /// Width in percent, for progress elements.
    pub width: Option<f64>,
    /// Alternate style, e.g. the pause control while the feed is paused.
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct Page {
    slots: HashMap<ElementId, Slot>,
}

impl Page {
    /// The full page markup.
    pub fn standard() -> Self {
        Self::from_markup(ElementId::iter())
    }

    /// Standard markup minus the given elements.
    pub fn without(hidden: &[ElementId]) -> Self {
        let mut page = Self::standard();
        page.slots.retain(|id, _| !hidden.contains(id));
        page
    }

    pub fn from_markup(ids: impl IntoIterator<Item = ElementId>) -> Self {
        let slots = ids
            .into_iter()
            .map(|id| {
                let slot = Slot {
                    text: id.default_text().to_string(),
                    ..Slot::default()
                };
                (id, slot)
            })
            .collect();
        Self { slots }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Ok when the element is present.
    pub fn require(&self, id: ElementId) -> Result<(), PageError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(PageError::MissingElement(id))
        }
    }

    fn slot_mut(&mut self, id: ElementId) -> Result<&mut Slot, PageError> {
        self.slots.get_mut(&id).ok_or(PageError::MissingElement(id))
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), PageError> {
        self.slot_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn set_width(&mut self, id: ElementId, percent: f64) -> Result<(), PageError> {
        self.slot_mut(id)?.width = Some(percent.clamp(0.0, 100.0));
        Ok(())
    }

    pub fn set_highlighted(&mut self, id: ElementId, highlighted: bool) -> Result<(), PageError> {
        self.slot_mut(id)?.highlighted = highlighted;
        Ok(())
    }

    pub fn slot(&self, id: ElementId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.slots.get(&id).map(|slot| slot.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ids_use_markup_names() {
        assert_eq!(ElementId::TotalDonated.to_string(), "totalDonated");
        assert_eq!(ElementId::UnicefProgress.to_string(), "unicefProgress");
        assert_eq!(ElementId::from_str("userVotingPower"), Ok(ElementId::UserVotingPower));
        assert!(ElementId::from_str("nope").is_err());
    }

    #[test]
    fn ids_deserialize_from_markup_names() {
        let ids: Vec<ElementId> = serde_json::from_str(r#"["sbtCard","pauseFeed"]"#).unwrap();
        assert_eq!(ids, vec![ElementId::SbtCard, ElementId::PauseFeed]);
    }

    #[test]
    fn missing_elements_are_reported_not_created() {
        let mut page = Page::without(&[ElementId::TotalVotes]);
        assert_eq!(
            page.set_text(ElementId::TotalVotes, "5"),
            Err(PageError::MissingElement(ElementId::TotalVotes))
        );
        assert!(page.text(ElementId::TotalVotes).is_none());
        assert!(page.set_text(ElementId::ActiveUsers, "5").is_ok());
        assert_eq!(page.text(ElementId::ActiveUsers), Some("5"));
    }

    #[test]
    fn controls_start_with_their_labels() {
        let page = Page::standard();
        assert_eq!(page.text(ElementId::PauseFeed), Some("Pause Updates"));
        assert_eq!(page.text(ElementId::UnicefPercentage), Some("0%"));
    }

    #[test]
    fn widths_are_clamped_to_percentages() {
        let mut page = Page::standard();
        page.set_width(ElementId::DoctorsProgress, 140.0).unwrap();
        assert_eq!(page.slot(ElementId::DoctorsProgress).unwrap().width, Some(100.0));
    }
}
