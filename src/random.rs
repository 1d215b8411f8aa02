//! Random source for the mock page data.
//!
//! Everything random on the page (donations, handles, vote baselines,
//! addresses) draws from a [`RandomSource`], so tests can inject fixed
//! sequences and `--seed` makes a run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Uniform index into a slice of length `len`. `len` must be non-zero.
pub fn index(rng: &mut dyn RandomSource, len: usize) -> usize {
    ((rng.next_f64() * len as f64) as usize).min(len - 1)
}

/// Pick an element uniformly.
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[index(rng, items.len())]
}

/// Uniform integer in `[low, low + span)`.
pub fn below(rng: &mut dyn RandomSource, low: u64, span: u64) -> u64 {
    let offset = ((rng.next_f64() * span as f64) as u64).min(span.saturating_sub(1));
    low + offset
}

/// `StdRng` backed source, either seeded or drawn from OS entropy.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, otherwise fresh entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::cycling;
    use super::*;

    #[test]
    fn index_stays_in_bounds_at_the_top_of_the_range() {
        let mut rng = cycling(vec![0.999_999_999]);
        assert_eq!(index(&mut rng, 5), 4);
    }

    #[test]
    fn pick_maps_unit_interval_onto_slice() {
        let items = ["a", "b", "c", "d"];
        let mut rng = cycling(vec![0.0, 0.26, 0.5, 0.99]);
        let picked: Vec<_> = (0..4).map(|_| *pick(&mut rng, &items)).collect();
        assert_eq!(picked, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn below_is_half_open() {
        let mut rng = cycling(vec![0.0, 0.999_999]);
        assert_eq!(below(&mut rng, 50, 100), 50);
        assert_eq!(below(&mut rng, 50, 100), 149);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..16 {
            let (x, y) = (a.next_f64(), b.next_f64());
            assert_eq!(x, y);
            assert!((0.0..1.0).contains(&x));
        }
    }
}
