//! Tests for utility functions

use std::time::Duration;

use model_rotator::util::{init_tracing, Clock, ManualClock, Priority};

#[test]
fn test_priority_ordering() {
    assert!(Priority::High < Priority::Medium);
    assert!(Priority::Medium < Priority::Low);
    assert!(Priority::High.rank() < Priority::Low.rank());
}

#[test]
fn test_priority_display() {
    assert_eq!(Priority::High.to_string(), "high");
    assert_eq!(Priority::Medium.to_string(), "medium");
    assert_eq!(Priority::Low.to_string(), "low");
}

#[test]
fn test_manual_clock_advance() {
    let clock = ManualClock::new();
    let start = clock.now();
    clock.advance(Duration::from_secs(61));
    assert_eq!(clock.now().duration_since(start), Duration::from_secs(61));
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
