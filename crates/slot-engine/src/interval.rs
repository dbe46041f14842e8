//! Minutes-of-day intervals.
//!
//! The whole engine models a single day as minutes since midnight. An
//! [`Interval`] is a half-open span `[start, start + duration)` within that
//! day; the only interval allowed to run right up to [`END_OF_DAY`] is the
//! trailing slot produced by [`Interval::closing`].

use serde::{Deserialize, Serialize};

/// First schedulable minute of the day.
pub const START_OF_DAY: u32 = 0;

/// One past the last schedulable minute of the day (24h × 60).
pub const END_OF_DAY: u32 = 24 * 60;

/// A half-open span of minutes within one day: `[start, start + duration)`.
///
/// Plain `Copy` value type with structural equality on `(start,
/// duration_minutes)` and no lifecycle of its own. Intervals produced by
/// the scheduler always satisfy `start <= end() <= END_OF_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Minutes since midnight.
    pub start: u32,
    /// Length of the span in minutes.
    pub duration_minutes: u32,
}

impl Interval {
    /// The full day, `[0, 1440)`.
    pub const WHOLE_DAY: Interval = Interval {
        start: START_OF_DAY,
        duration_minutes: END_OF_DAY,
    };

    /// Interval starting at `start` and running for `duration_minutes`.
    pub const fn new(start: u32, duration_minutes: u32) -> Self {
        Interval {
            start,
            duration_minutes,
        }
    }

    /// Interior slot bounded by explicit start and end minutes.
    ///
    /// Used for slots capped by the start of the next busy span. Requires
    /// `start <= end`.
    pub fn between(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "inverted interval [{start}, {end})");
        Interval {
            start,
            duration_minutes: end - start,
        }
    }

    /// Trailing slot of the day, running from `start` to [`END_OF_DAY`].
    ///
    /// Interior slots are always capped by a subsequent event's start; this
    /// is the one constructor whose result may touch the midnight boundary.
    /// Requires `start <= END_OF_DAY`.
    pub fn closing(start: u32) -> Self {
        debug_assert!(start <= END_OF_DAY, "slot start {start} past end of day");
        Interval {
            start,
            duration_minutes: END_OF_DAY - start,
        }
    }

    /// One past the last minute of the span.
    pub const fn end(self) -> u32 {
        self.start + self.duration_minutes
    }

    /// Whether `other` lies entirely within this interval.
    pub const fn contains(self, other: Interval) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }
}
