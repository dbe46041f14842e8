//! Compute the free slots able to host a requested meeting.
//!
//! Sorts the calendar by start time, compacts it down to the events that
//! actually block the requested attendees, then scans the gaps between
//! blocking spans. Runs twice: first honoring optional attendees too, then,
//! only if that leaves nothing, against the mandatory attendees alone.

use std::collections::HashSet;

use crate::event::{BusyEvent, MeetingRequest};
use crate::interval::{Interval, END_OF_DAY, START_OF_DAY};

/// Find every interval of the day in which the requested meeting fits.
///
/// Returns slots sorted ascending by start, pairwise non-overlapping, each
/// at least `request.duration_minutes` long. An empty result means no
/// feasible slot exists; it is a normal outcome, not an error.
///
/// Optional attendees are a soft preference: the primary pass treats their
/// events as blocking, and only when that pass yields nothing is the query
/// re-run against events of mandatory attendees alone.
///
/// Pure and deterministic; does not validate its inputs (see
/// [`crate::validate`] for the boundary-layer checks).
pub fn find_slots(events: &[BusyEvent], request: &MeetingRequest) -> Vec<Interval> {
    // No slot in a single day can host more than the day itself.
    if request.duration_minutes > Interval::WHOLE_DAY.duration_minutes {
        return Vec::new();
    }

    // An empty calendar, or one made purely of attendee-less placeholder
    // events, carries no blocking information.
    if events.is_empty() || events.iter().all(|e| e.attendees.is_empty()) {
        return vec![Interval::WHOLE_DAY];
    }

    // Stable sort: events tied on start keep their input order, which
    // decides the "last kept" event during compaction.
    let mut sorted: Vec<&BusyEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.when.start);

    let mandatory: HashSet<&str> = request
        .mandatory_attendees
        .iter()
        .map(String::as_str)
        .collect();
    let mut everyone = mandatory.clone();
    everyone.extend(request.optional_attendees.iter().map(String::as_str));

    let mandatory_blocking = compact_blocking(&sorted, &mandatory);
    let all_blocking = compact_blocking(&sorted, &everyone);

    // No event touches any requested attendee at all.
    if all_blocking.is_empty() {
        return vec![Interval::WHOLE_DAY];
    }

    let slots = collect_gaps(&all_blocking, request.duration_minutes);
    if !slots.is_empty() {
        return slots;
    }
    collect_gaps(&mandatory_blocking, request.duration_minutes)
}

/// Earliest slot able to host the requested meeting, if any.
///
/// Delegates to [`find_slots`] and returns the first entry.
pub fn find_first_slot(events: &[BusyEvent], request: &MeetingRequest) -> Option<Interval> {
    find_slots(events, request).into_iter().next()
}

/// Reduce sorted events to the ones blocking the given attendees.
///
/// Keeps only events sharing at least one attendee with `attendee_filter`,
/// and drops an event whose interval lies entirely within the interval of
/// the most recently kept event. The containment check runs against that
/// single predecessor only — chained pairwise overlaps stay separate
/// entries, and the gap scan skips the inverted candidates they produce.
fn compact_blocking<'a>(
    sorted: &[&'a BusyEvent],
    attendee_filter: &HashSet<&str>,
) -> Vec<&'a BusyEvent> {
    let mut kept: Vec<&BusyEvent> = Vec::new();
    for &event in sorted {
        if !event
            .attendees
            .iter()
            .any(|a| attendee_filter.contains(a.as_str()))
        {
            continue;
        }
        if let Some(last) = kept.last() {
            if last.when.contains(event.when) {
                continue;
            }
        }
        kept.push(event);
    }
    kept
}

/// Scan the gaps around a sorted, compacted blocking list.
///
/// Candidates: before the first event, between each pair of neighbors, and
/// after the last event (the one slot permitted to reach [`END_OF_DAY`]).
/// A candidate is emitted when it is non-empty and fits the duration;
/// adjacent or overlapping blocking spans yield `start >= end` and are
/// skipped without any explicit merge step. Appended in scan order, so the
/// result is already sorted.
fn collect_gaps(blocking: &[&BusyEvent], duration_minutes: u32) -> Vec<Interval> {
    let Some(last) = blocking.last() else {
        return Vec::new();
    };

    let fits = |start: u32, end: u32| start < end && start + duration_minutes <= end;

    let mut slots = Vec::new();
    for (i, event) in blocking.iter().enumerate() {
        let start = if i == 0 {
            START_OF_DAY
        } else {
            blocking[i - 1].when.end()
        };
        let end = event.when.start;
        if fits(start, end) {
            slots.push(Interval::between(start, end));
        }
    }

    let tail = last.when.end();
    if fits(tail, END_OF_DAY) {
        slots.push(Interval::closing(tail));
    }

    slots
}
