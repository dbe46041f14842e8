//! Property-based tests for the free-slot computation using proptest.
//!
//! These verify invariants that should hold for *any* structurally valid
//! calendar and request, not just the specific examples in
//! `scheduler_tests.rs`.

use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use slot_engine::{find_slots, BusyEvent, Interval, MeetingRequest, END_OF_DAY};

// ---------------------------------------------------------------------------
// Strategies — generate in-range calendars and requests
// ---------------------------------------------------------------------------

fn arb_attendee() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alice".to_string()),
        Just("bob".to_string()),
        Just("carol".to_string()),
        Just("dave".to_string()),
    ]
}

/// An event somewhere in the day, up to four hours long, clamped to the
/// day boundary, with zero to three attendees from a small shared roster
/// (small on purpose, so calendars and requests actually collide).
fn arb_event() -> impl Strategy<Value = BusyEvent> {
    (0..END_OF_DAY, 0u32..=240, hash_set(arb_attendee(), 0..=3)).prop_map(
        |(start, length, attendees)| BusyEvent {
            when: Interval::between(start, (start + length).min(END_OF_DAY)),
            attendees,
        },
    )
}

fn arb_events() -> impl Strategy<Value = Vec<BusyEvent>> {
    vec(arb_event(), 0..12)
}

/// Durations run past one day so the infeasible branch gets exercised too.
fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (
        0u32..=1500,
        hash_set(arb_attendee(), 0..=3),
        hash_set(arb_attendee(), 0..=3),
    )
        .prop_map(
            |(duration_minutes, mandatory_attendees, optional_attendees)| MeetingRequest {
                duration_minutes,
                mandatory_attendees,
                optional_attendees,
            },
        )
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Output is sorted ascending and pairwise non-overlapping
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_are_sorted_and_disjoint(events in arb_events(), request in arb_request()) {
        let slots = find_slots(&events, &request);
        for window in slots.windows(2) {
            prop_assert!(
                window[0].end() <= window[1].start,
                "slots overlap or are out of order: {:?} then {:?}",
                window[0],
                window[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every slot fits the requested duration and stays in the day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_fit_duration_within_the_day(events in arb_events(), request in arb_request()) {
        for slot in find_slots(&events, &request) {
            prop_assert!(
                slot.duration_minutes >= request.duration_minutes,
                "slot {:?} shorter than the {} minutes requested",
                slot,
                request.duration_minutes
            );
            prop_assert!(slot.end() <= END_OF_DAY, "slot {:?} passes end of day", slot);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No slot ever overlaps an event with a mandatory attendee
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_avoid_mandatory_events(events in arb_events(), request in arb_request()) {
        let slots = find_slots(&events, &request);
        for event in events.iter().filter(|e| {
            e.attendees
                .iter()
                .any(|a| request.mandatory_attendees.contains(a))
        }) {
            for slot in &slots {
                prop_assert!(
                    slot.end() <= event.when.start || event.when.end() <= slot.start,
                    "slot {:?} overlaps mandatory event {:?}",
                    slot,
                    event.when
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Determinism — identical inputs, identical output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn repeated_queries_agree(events in arb_events(), request in arb_request()) {
        prop_assert_eq!(find_slots(&events, &request), find_slots(&events, &request));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Total — never panics on in-range input
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn never_panics(events in arb_events(), request in arb_request()) {
        let _ = find_slots(&events, &request);
    }
}
