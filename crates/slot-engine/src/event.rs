//! Query inputs: busy calendar events and the meeting request.
//!
//! Both types are plain immutable containers supplied wholesale by the
//! caller for each query; the engine never mutates or retains them.
//! Attendee sets are `HashSet`s so that attendee-overlap checks during
//! compaction are hash lookups rather than list scans.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// An already-scheduled event occupying one or more participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyEvent {
    /// The span of the day the event occupies.
    pub when: Interval,
    /// Identifiers of the participants busy during [`Self::when`].
    pub attendees: HashSet<String>,
}

impl BusyEvent {
    pub fn new<I, S>(when: Interval, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BusyEvent {
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// A request to schedule a meeting of a given length.
///
/// Mandatory attendees are a hard constraint on every returned slot;
/// optional attendees are a soft preference, dropped when honoring them
/// leaves no feasible slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Requested meeting length in minutes.
    pub duration_minutes: u32,
    /// Participants whose availability is a hard constraint.
    pub mandatory_attendees: HashSet<String>,
    /// Participants accommodated only when a slot exists for them too.
    #[serde(default)]
    pub optional_attendees: HashSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(duration_minutes: u32, mandatory_attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            duration_minutes,
            mandatory_attendees: mandatory_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
        }
    }

    /// Adds optional attendees to the request.
    pub fn with_optional<I, S>(mut self, optional_attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional_attendees.into_iter().map(Into::into));
        self
    }
}
