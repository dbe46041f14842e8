//! # slot-engine
//!
//! Single-day meeting-slot computation. Given a calendar of busy events and
//! a request naming mandatory and optional attendees, the engine returns
//! every interval of the day long enough to host the meeting with all
//! mandatory attendees free, preferring but not requiring the optional
//! attendees' availability.
//!
//! The model is one day in minutes since midnight (`0..=1440`); there is no
//! persistence, no recurrence, no timezone handling, and no I/O. Each query
//! is a pure function of its inputs, so concurrent callers need no
//! coordination.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_slots, BusyEvent, Interval, MeetingRequest};
//!
//! // Alice is busy 09:00–10:00 (minutes 540–600).
//! let events = vec![BusyEvent::new(Interval::new(540, 60), ["alice"])];
//! let request = MeetingRequest::new(30, ["alice"]);
//!
//! let slots = find_slots(&events, &request);
//! assert_eq!(slots, vec![Interval::new(0, 540), Interval::new(600, 840)]);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — minutes-of-day spans and the day-boundary constants
//! - [`event`] — `BusyEvent` / `MeetingRequest` query inputs
//! - [`scheduler`] — the free-slot computation
//! - [`validate`] — opt-in boundary checks for untrusted inputs
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod interval;
pub mod scheduler;
pub mod validate;

pub use error::SlotError;
pub use event::{BusyEvent, MeetingRequest};
pub use interval::{Interval, END_OF_DAY, START_OF_DAY};
pub use scheduler::{find_first_slot, find_slots};
pub use validate::{validate_events, validate_query, validate_request};
