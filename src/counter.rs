//! Animated counters for the numeric display targets.

use crate::format::format_number;
use std::time::{Duration, Instant};

/// Cubic ease-out over `progress` in `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// A single counter animation from `start` to `end`.
#[derive(Debug, Clone)]
pub struct Counter {
    start: f64,
    end: f64,
    duration: Duration,
    prefix: &'static str,
    started_at: Instant,
}

impl Counter {
    pub fn new(start: f64, end: f64, duration: Duration, prefix: &'static str, now: Instant) -> Self {
        Self {
            start,
            end,
            duration,
            prefix,
            started_at: now,
        }
    }

    /// Animation progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated value; exactly `end` once the duration has elapsed.
    pub fn value(&self, now: Instant) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * ease_out_cubic(progress)
    }

    /// Targets with a fractional part render with two decimals, others as
    /// grouped integers.
    pub fn is_decimal(&self) -> bool {
        self.end.fract() != 0.0
    }

    pub fn display(&self, now: Instant) -> String {
        let value = self.value(now);
        if self.is_decimal() {
            format!("{}{:.2}", self.prefix, value)
        } else {
            format!("{}{}", self.prefix, format_number(value.max(0.0).floor() as u64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn converges_exactly_at_and_after_duration() {
        let t0 = Instant::now();
        for (end, duration) in [(125_000.0, 2_000), (12.35, 1_500), (12.0, 1_000), (7.0, 1)] {
            let counter = Counter::new(0.0, end, ms(duration), "", t0);
            assert_eq!(counter.value(t0 + ms(duration)), end);
            assert_eq!(counter.value(t0 + ms(duration * 3)), end);
            assert!(counter.is_finished(t0 + ms(duration)));
        }
    }

    #[test]
    fn starts_from_start_value() {
        let t0 = Instant::now();
        let counter = Counter::new(40.0, 100.0, ms(1_000), "", t0);
        assert_eq!(counter.value(t0), 40.0);
        assert!(!counter.is_finished(t0 + ms(999)));
    }

    #[test]
    fn eases_out_so_the_midpoint_is_past_half() {
        let t0 = Instant::now();
        let counter = Counter::new(0.0, 1_000.0, ms(1_000), "", t0);
        assert_eq!(counter.value(t0 + ms(500)), 875.0);
    }

    #[test]
    fn integral_targets_are_grouped() {
        let t0 = Instant::now();
        let counter = Counter::new(0.0, 125_000.0, ms(2_000), "$", t0);
        assert_eq!(counter.display(t0), "$0");
        assert_eq!(counter.display(t0 + ms(2_000)), "$125,000");
    }

    #[test]
    fn fractional_targets_keep_two_decimals() {
        let t0 = Instant::now();
        let counter = Counter::new(0.0, 12.35, ms(1_500), "$", t0);
        assert!(counter.is_decimal());
        assert_eq!(counter.display(t0), "$0.00");
        assert_eq!(counter.display(t0 + ms(1_500)), "$12.35");
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let counter = Counter::new(0.0, 10.0, Duration::ZERO, "", t0);
        assert_eq!(counter.display(t0), "10");
    }
}
