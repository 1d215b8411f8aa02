//! Mock on-chain voting tally.

use crate::consts::cli_consts::voting;
use crate::elements::ElementId;
use crate::error::PageError;
use crate::random::{self, RandomSource};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The closed set of charities that can receive votes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CharityKey {
    Unicef,
    Doctors,
    Environment,
}

impl CharityKey {
    pub const ALL: [CharityKey; 3] = [CharityKey::Unicef, CharityKey::Doctors, CharityKey::Environment];

    pub fn key(&self) -> &'static str {
        match self {
            CharityKey::Unicef => "unicef",
            CharityKey::Doctors => "doctors",
            CharityKey::Environment => "environment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CharityKey::Unicef => "UNICEF",
            CharityKey::Doctors => "Doctors Without Borders",
            CharityKey::Environment => "Environmental Defense Fund",
        }
    }

    fn position(&self) -> usize {
        match self {
            CharityKey::Unicef => 0,
            CharityKey::Doctors => 1,
            CharityKey::Environment => 2,
        }
    }

    pub fn votes_element(&self) -> ElementId {
        match self {
            CharityKey::Unicef => ElementId::UnicefVotes,
            CharityKey::Doctors => ElementId::DoctorsVotes,
            CharityKey::Environment => ElementId::EnvironmentVotes,
        }
    }

    pub fn percentage_element(&self) -> ElementId {
        match self {
            CharityKey::Unicef => ElementId::UnicefPercentage,
            CharityKey::Doctors => ElementId::DoctorsPercentage,
            CharityKey::Environment => ElementId::EnvironmentPercentage,
        }
    }

    pub fn progress_element(&self) -> ElementId {
        match self {
            CharityKey::Unicef => ElementId::UnicefProgress,
            CharityKey::Doctors => ElementId::DoctorsProgress,
            CharityKey::Environment => ElementId::EnvironmentProgress,
        }
    }

    /// The vote control for this charity.
    pub fn button_element(&self) -> ElementId {
        match self {
            CharityKey::Unicef => ElementId::UnicefVote,
            CharityKey::Doctors => ElementId::DoctorsVote,
            CharityKey::Environment => ElementId::EnvironmentVote,
        }
    }
}

impl FromStr for CharityKey {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicef" => Ok(CharityKey::Unicef),
            "doctors" => Ok(CharityKey::Doctors),
            "environment" => Ok(CharityKey::Environment),
            other => Err(PageError::UnknownCharity(other.to_string())),
        }
    }
}

impl Display for CharityKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Vote counts plus the viewer's remaining voting power.
///
/// `total_votes` always equals the sum of the per-charity counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingTally {
    counts: [u64; 3],
    total_votes: u64,
    voting_power: u64,
}

impl VotingTally {
    /// An empty tally; see [`VotingTally::initialize`] for the page baseline.
    pub fn new(voting_power: u64) -> Self {
        Self {
            counts: [0; 3],
            total_votes: 0,
            voting_power,
        }
    }

    /// Seed every charity with a random baseline.
    pub fn initialize(&mut self, rng: &mut dyn RandomSource) {
        for (count, floor) in self.counts.iter_mut().zip(voting::BASELINE_FLOORS) {
            *count = random::below(rng, floor, voting::BASELINE_SPAN);
        }
        self.total_votes = self.counts.iter().sum();
    }

    /// Spend one unit of voting power on `charity`.
    pub fn cast_vote(&mut self, charity: CharityKey) -> Result<(), PageError> {
        if self.voting_power == 0 {
            return Err(PageError::InsufficientPower);
        }
        self.counts[charity.position()] += 1;
        self.total_votes += 1;
        self.voting_power -= 1;
        Ok(())
    }

    pub fn votes(&self, charity: CharityKey) -> u64 {
        self.counts[charity.position()]
    }

    pub fn total_votes(&self) -> u64 {
        self.total_votes
    }

    pub fn voting_power(&self) -> u64 {
        self.voting_power
    }

    /// Share of the total in percent; 0 when nobody has voted.
    pub fn percentage(&self, charity: CharityKey) -> f64 {
        if self.total_votes == 0 {
            0.0
        } else {
            self.votes(charity) as f64 / self.total_votes as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use crate::random::test_support::cycling;

    fn sum(tally: &VotingTally) -> u64 {
        CharityKey::ALL.iter().map(|c| tally.votes(*c)).sum()
    }

    #[test]
    fn initialize_uses_baselines_and_keeps_total_in_sync() {
        let mut rng = cycling(vec![0.0, 0.5, 0.999_999]);
        let mut tally = VotingTally::new(1_000);
        tally.initialize(&mut rng);
        assert_eq!(tally.votes(CharityKey::Unicef), 50);
        assert_eq!(tally.votes(CharityKey::Doctors), 80);
        assert_eq!(tally.votes(CharityKey::Environment), 119);
        assert_eq!(tally.total_votes(), 249);
    }

    #[test]
    fn total_matches_sum_after_every_vote() {
        let mut rng = SeededRandom::from_seed(9);
        let mut tally = VotingTally::new(50);
        tally.initialize(&mut rng);
        assert_eq!(sum(&tally), tally.total_votes());
        for i in 0..60 {
            let _ = tally.cast_vote(CharityKey::ALL[i % 3]);
            assert_eq!(sum(&tally), tally.total_votes());
        }
        assert_eq!(tally.voting_power(), 0);
    }

    #[test]
    fn vote_spends_exactly_one_unit() {
        let mut tally = VotingTally::new(5);
        tally.initialize(&mut cycling(vec![0.25]));
        let before = tally.clone();
        tally.cast_vote(CharityKey::Unicef).unwrap();
        assert_eq!(tally.votes(CharityKey::Unicef), before.votes(CharityKey::Unicef) + 1);
        assert_eq!(tally.total_votes(), before.total_votes() + 1);
        assert_eq!(tally.voting_power(), 4);
    }

    #[test]
    fn vote_without_power_changes_nothing() {
        let mut tally = VotingTally::new(0);
        tally.initialize(&mut cycling(vec![0.5]));
        let before = tally.clone();
        assert_eq!(tally.cast_vote(CharityKey::Doctors), Err(PageError::InsufficientPower));
        assert_eq!(tally, before);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(
            "redcross".parse::<CharityKey>(),
            Err(PageError::UnknownCharity("redcross".to_string()))
        );
        assert_eq!("environment".parse::<CharityKey>(), Ok(CharityKey::Environment));
    }

    #[test]
    fn percentages() {
        let mut tally = VotingTally::new(10);
        assert_eq!(tally.percentage(CharityKey::Unicef), 0.0);
        tally.cast_vote(CharityKey::Unicef).unwrap();
        tally.cast_vote(CharityKey::Unicef).unwrap();
        tally.cast_vote(CharityKey::Doctors).unwrap();
        tally.cast_vote(CharityKey::Environment).unwrap();
        assert_eq!(tally.percentage(CharityKey::Unicef), 50.0);
        assert_eq!(tally.percentage(CharityKey::Doctors), 25.0);
    }

    #[test]
    fn keys_round_trip_through_names() {
        for charity in CharityKey::ALL {
            assert_eq!(charity.key().parse::<CharityKey>(), Ok(charity));
        }
    }
}
