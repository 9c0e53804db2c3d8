use chrono::{DateTime, Duration, Utc};

/// A simple clock abstraction for deterministic time in the engine and tests.
///
/// The session reads this clock when a question is shown and again when an
/// answer is submitted; the difference is the recorded response time.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Seconds elapsed between `earlier` and the clock's current time.
    ///
    /// Clamped at zero so clock skew can never produce a negative
    /// response time.
    #[must_use]
    pub fn seconds_since(&self, earlier: DateTime<Utc>) -> f64 {
        let millis = (self.now() - earlier).num_milliseconds();
        (millis as f64 / 1000.0).max(0.0)
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_measures_advanced_time() {
        let mut clock = fixed_clock();
        let shown_at = clock.now();
        clock.advance(Duration::milliseconds(2500));
        assert_eq!(clock.seconds_since(shown_at), 2.5);
    }

    #[test]
    fn skewed_clock_never_reports_negative_elapsed() {
        let clock = fixed_clock();
        let future = clock.now() + Duration::seconds(10);
        assert_eq!(clock.seconds_since(future), 0.0);
    }
}
