//! Shared-converter acceptance tests.
//!
//! The converter holds no mutable state, so a single value can be used from
//! any number of threads without synchronization.

use super::common::test_converter;
use std::thread;
use timing_common::TimeUnit;

#[test]
fn test_parallel_conversions_match_serial() {
    let conv = test_converter();
    let inputs: Vec<i64> = (0..1_000).map(|i| i * 1_337).collect();

    let serial: Vec<(i64, u64)> = inputs
        .iter()
        .map(|&d| (conv.to_cycles(d, TimeUnit::Microseconds), conv.us_to_clock_cycles(d)))
        .collect();

    let parallel: Vec<Vec<(i64, u64)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let conv = &conv;
                let inputs = &inputs;
                scope.spawn(move || {
                    inputs
                        .iter()
                        .map(|&d| (conv.to_cycles(d, TimeUnit::Microseconds), conv.us_to_clock_cycles(d)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in parallel {
        assert_eq!(result, serial);
    }
}
