#![cfg(feature = "serde")]

//! Integration tests for serde support in cascade-heap.
//!
//! Configuration types round-trip through JSON so queues can be built from
//! external settings.

use cascade_heap::cascade::{ArenaCapacity, CascadeConfig, CascadeQueue, Natural};
use rstest::rstest;

#[rstest]
#[case(CascadeConfig::default())]
#[case(CascadeConfig::default().with_run_capacity(64).with_arena_capacity(ArenaCapacity::Fixed(1_000)))]
fn test_config_json_roundtrip(#[case] config: CascadeConfig) {
    let json = serde_json::to_string(&config).unwrap();
    let restored: CascadeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, restored);
}

#[rstest]
fn test_config_from_json_builds_queue() {
    let json = r#"{"run_capacity":2,"arena":{"Fixed":4}}"#;
    let config: CascadeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.arena, ArenaCapacity::Fixed(4));

    let mut queue = CascadeQueue::with_config(config, Natural);
    for value in [5, 3, 8, 1] {
        queue.push(value).unwrap();
    }
    assert!(queue.push(0).is_err());
    assert_eq!(queue.pop(), Ok(1));
}

#[rstest]
fn test_growable_arena_json_form() {
    let json = serde_json::to_string(&ArenaCapacity::Growable).unwrap();
    assert_eq!(json, r#""Growable""#);
}
