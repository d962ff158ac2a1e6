use std::fmt::{Debug, Formatter};

use chrono::{DateTime, TimeDelta, Utc};

/// Half-open UTC time range.
pub type Interval<Tz = Utc> = RangeExclusive<DateTime<Tz>>;

#[must_use]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct RangeExclusive<T: Copy> {
    /// Inclusive.
    pub start: T,

    /// Exclusive.
    pub end: T,
}

impl<T: Copy + Debug> Debug for RangeExclusive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl<T: Copy> RangeExclusive<T> {
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl Interval {
    /// Starting at `start` and lasting `duration`.
    pub fn starting_at(start: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self::new(start, start + duration)
    }
}
