//! Scheduler-style acceptance tests.
//!
//! A minimal event queue keyed by primary cycle deadlines stands in for the
//! emulator scheduler that consumes these conversions.
//!
//! # Acceptance Criteria
//!
//! - Events fire in the same order as their wall-clock delays
//! - Saturated deadlines sort after every representable deadline
//! - Repeated runs produce identical cycle timelines

use super::common::test_converter;
use std::collections::BinaryHeap;
use std::cmp::Reverse;
use timing_common::TimeUnit;
use timing_core::CycleConverter;

/// Schedule `(delay, unit, id)` events at `now` and drain them in deadline order.
fn run_timeline(conv: &CycleConverter, now: i64, events: &[(i64, TimeUnit, u32)]) -> Vec<(i64, u32)> {
    let mut queue = BinaryHeap::new();
    for &(delay, unit, id) in events {
        let deadline = now.saturating_add(conv.to_cycles(delay, unit));
        queue.push(Reverse((deadline, id)));
    }
    std::iter::from_fn(|| queue.pop().map(|Reverse(entry)| entry)).collect()
}

#[test]
fn test_events_fire_in_delay_order() {
    let conv = test_converter();
    let events = [
        (2, TimeUnit::Milliseconds, 1),
        (1_500, TimeUnit::Microseconds, 2),
        (1_000_000, TimeUnit::Nanoseconds, 3),
        (3, TimeUnit::Milliseconds, 4),
    ];

    let fired = run_timeline(&conv, 0, &events);
    let order: Vec<u32> = fired.iter().map(|&(_, id)| id).collect();
    assert_eq!(order, vec![3, 2, 1, 4]);
    assert_eq!(fired[0].0, 19_200);
    assert_eq!(fired[1].0, 28_800);
    assert_eq!(fired[2].0, 38_400);
}

#[test]
fn test_saturated_deadline_sorts_last() {
    let conv = test_converter();
    let events = [(i64::MAX, TimeUnit::Milliseconds, 1), (10, TimeUnit::Milliseconds, 2)];

    let fired = run_timeline(&conv, 1_000, &events);
    assert_eq!(fired[0].1, 2);
    assert_eq!(fired[1], (i64::MAX, 1));
}

#[test]
fn test_timeline_is_deterministic() {
    let conv = test_converter();
    let events: Vec<(i64, TimeUnit, u32)> = (0..200u32)
        .map(|i| {
            let unit = TimeUnit::ALL[i as usize % 3];
            (i64::from(i) * 7_919 % 100_003, unit, i)
        })
        .collect();

    let first = run_timeline(&conv, 42, &events);
    let second = run_timeline(&conv, 42, &events);
    assert_eq!(first, second);
}

#[test]
fn test_elapsed_cycles_back_to_time() {
    let conv = test_converter();
    let start = conv.ms_to_cycles(5);
    let end = conv.ms_to_cycles(12);
    assert_eq!(conv.cycles_to_ms(end - start).as_millis(), 7);
    assert_eq!(conv.cycles_to_us(end - start).as_micros(), 7_000);
}
