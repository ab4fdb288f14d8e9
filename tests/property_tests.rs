//! Property-based tests for ringlog using proptest

use proptest::prelude::*;
use ringlog::{LogLevel, Record, RingQueue};

// ============================================================================
// LogLevel properties
// ============================================================================

proptest! {
    /// String conversions roundtrip for every level
    #[test]
    fn log_level_str_roundtrip(level in prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Parsing arbitrary input never panics
    #[test]
    fn log_level_parse_total(input in ".*") {
        let _ = input.parse::<LogLevel>();
    }
}

// ============================================================================
// RingQueue properties
// ============================================================================

proptest! {
    /// Capacity is the next power of two at or above the request
    #[test]
    fn capacity_rounds_up(requested in 1usize..10_000) {
        let queue: RingQueue<u8> = RingQueue::with_capacity(requested);
        let capacity = queue.capacity();
        prop_assert!(capacity.is_power_of_two());
        prop_assert!(capacity >= requested.max(2));
        prop_assert!(capacity / 2 < requested.max(2));
    }

    /// A single-threaded fill/drain preserves order exactly
    #[test]
    fn fifo_preserved(items in proptest::collection::vec(any::<u32>(), 0..200)) {
        let queue = RingQueue::with_capacity(256);
        for &item in &items {
            prop_assert!(queue.try_enqueue(item).is_ok());
        }
        let mut drained = Vec::with_capacity(items.len());
        while let Some(item) = queue.try_dequeue() {
            drained.push(item);
        }
        prop_assert_eq!(drained, items);
    }

    /// Exactly capacity - 1 items fit, regardless of requested size
    #[test]
    fn usable_space_is_capacity_minus_one(requested in 2usize..128) {
        let queue = RingQueue::with_capacity(requested);
        for i in 0..queue.capacity() - 1 {
            prop_assert!(queue.try_enqueue(i).is_ok());
        }
        prop_assert!(queue.try_enqueue(0).is_err());
    }
}

// ============================================================================
// Sanitisation properties
// ============================================================================

proptest! {
    /// Rendered lines never contain control characters other than tab
    #[test]
    fn rendered_line_is_printable(payload in ".*") {
        let record = Record::new(LogLevel::Info, "prop.rs", 1, payload);
        let line = record.render();
        prop_assert!(line.chars().all(|c| c == '\t' || !c.is_control()));
    }

    /// Sanitisation only removes characters, never reorders or alters them
    #[test]
    fn sanitised_payload_is_a_suffix(payload in ".*") {
        let expected: String = payload
            .chars()
            .filter(|&c| c == '\t' || !c.is_control())
            .collect();
        let record = Record::new(LogLevel::Info, "prop.rs", 1, payload);
        prop_assert!(record.render().ends_with(&expected));
    }
}
