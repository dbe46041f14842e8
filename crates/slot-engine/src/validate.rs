//! Opt-in input validation for the query boundary.
//!
//! [`crate::scheduler::find_slots`] trusts its caller: it never rejects an
//! input, and out-of-range intervals simply flow through the arithmetic.
//! Callers sitting on an untrusted edge (the CLI, a network handler) run
//! these checks first. Library consumers that construct their own inputs may
//! skip them.

use crate::error::{Result, SlotError};
use crate::event::{BusyEvent, MeetingRequest};
use crate::interval::END_OF_DAY;

/// Check that every event stays within the day and names no blank attendee.
pub fn validate_events(events: &[BusyEvent]) -> Result<()> {
    for event in events {
        // u64 arithmetic so degenerate inputs near u32::MAX can't wrap.
        let end = u64::from(event.when.start) + u64::from(event.when.duration_minutes);
        if end > u64::from(END_OF_DAY) {
            return Err(SlotError::IntervalPastEndOfDay {
                start: event.when.start,
                end,
            });
        }
        if event.attendees.iter().any(|a| a.trim().is_empty()) {
            return Err(SlotError::BlankAttendee { place: "event" });
        }
    }
    Ok(())
}

/// Check that the request names no blank attendee.
///
/// A duration longer than the day is not an error: the scheduler answers it
/// with an empty result, which is the "no feasible slot" outcome rather than
/// a malformed input.
pub fn validate_request(request: &MeetingRequest) -> Result<()> {
    let blank = |ids: &std::collections::HashSet<String>| ids.iter().any(|a| a.trim().is_empty());
    if blank(&request.mandatory_attendees) || blank(&request.optional_attendees) {
        return Err(SlotError::BlankAttendee { place: "request" });
    }
    Ok(())
}

/// Validate a full query: events first, then the request.
pub fn validate_query(events: &[BusyEvent], request: &MeetingRequest) -> Result<()> {
    validate_events(events)?;
    validate_request(request)
}
