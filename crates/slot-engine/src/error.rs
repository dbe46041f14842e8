//! Error types for slot-engine input validation.
//!
//! The scheduling path itself is total and defines no errors; these kinds
//! exist only for the opt-in checks in [`crate::validate`].

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// An event interval extends past the 1440-minute day (or its bounds
    /// overflow `u32`).
    #[error("event interval [{start}, {end}) extends past the end of the day")]
    IntervalPastEndOfDay { start: u32, end: u64 },

    /// An attendee identifier is empty or whitespace-only.
    #[error("blank attendee identifier in {place}")]
    BlankAttendee {
        /// Where the identifier appeared: an event or the request.
        place: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SlotError>;
