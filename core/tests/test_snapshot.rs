//! Snapshot Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: Restored generator produces identical results
//! - Gaussian cache: A pending Gaussian survives save/load
//! - Validation: Out-of-range state is rejected

use java_random_core_rs::{GeneratorSnapshot, JavaRandom, RandomError};

fn advanced_generator(seed: i64, draws: usize) -> JavaRandom {
    let mut rng = JavaRandom::new(seed);
    for _ in 0..draws {
        rng.next_long();
    }
    rng
}

#[test]
fn test_snapshot_captures_state() {
    let rng = advanced_generator(42, 10);
    let snapshot = rng.snapshot();

    assert_eq!(snapshot.state, rng.state());
    assert_eq!(snapshot.next_next_gaussian, None);
}

#[test]
fn test_restore_continues_sequence() {
    let mut original = advanced_generator(42, 10);
    let mut restored = JavaRandom::from_snapshot(original.snapshot()).unwrap();

    for _ in 0..100 {
        assert_eq!(restored.next_int(), original.next_int());
        assert_eq!(restored.next_double(), original.next_double());
    }
}

#[test]
fn test_restore_preserves_pending_gaussian() {
    let mut original = JavaRandom::new(3);
    original.next_gaussian();
    assert!(original.has_cached_gaussian());

    let snapshot = original.snapshot();
    assert!(snapshot.next_next_gaussian.is_some());

    let mut restored = JavaRandom::from_snapshot(snapshot).unwrap();
    let state_before = restored.state();

    assert_eq!(restored.next_gaussian(), original.next_gaussian());
    assert_eq!(restored.state(), state_before);
    assert_eq!(restored.next_gaussian(), original.next_gaussian());
}

#[test]
fn test_json_round_trip_is_bit_exact() {
    let mut original = JavaRandom::new(-77);
    original.next_gaussian();

    let json = original.snapshot().to_json().unwrap();
    let snapshot = GeneratorSnapshot::from_json(&json).unwrap();

    assert_eq!(snapshot, original.snapshot());
    let restored = JavaRandom::from_snapshot(snapshot).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_generator_serializes_through_snapshot() {
    let mut original = advanced_generator(9, 4);
    original.next_gaussian();

    let json = serde_json::to_string(&original).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["state"], original.state());

    let mut restored: JavaRandom = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.next_gaussian(), original.next_gaussian());
    assert_eq!(restored.next_long(), original.next_long());
}

#[test]
fn test_deserialize_rejects_wide_state() {
    let json = format!(r#"{{"state":{},"next_next_gaussian":null}}"#, 1u64 << 50);

    let result: Result<JavaRandom, _> = serde_json::from_str(&json);
    assert!(result.is_err());

    let result = GeneratorSnapshot::from_json(&json);
    assert!(matches!(
        result,
        Err(RandomError::StateOutOfRange { state }) if state == 1 << 50
    ));
}

#[test]
fn test_from_snapshot_rejects_infinite_gaussian() {
    let snapshot = GeneratorSnapshot {
        state: 12,
        next_next_gaussian: Some(f64::INFINITY),
    };

    let err = JavaRandom::from_snapshot(snapshot).unwrap_err();
    assert!(matches!(err, RandomError::NonFiniteGaussian { .. }));
    assert_eq!(err.to_string(), "Cached Gaussian must be finite, got inf");
}

#[test]
fn test_malformed_json_reported() {
    let err = GeneratorSnapshot::from_json("{\"state\":").unwrap_err();
    assert!(matches!(err, RandomError::Json(_)));
}

#[test]
fn test_try_from_snapshot() {
    let snapshot = GeneratorSnapshot {
        state: 0x5DEECE66D,
        next_next_gaussian: None,
    };

    let rng = JavaRandom::try_from(snapshot).unwrap();
    assert_eq!(rng, JavaRandom::new(0));
}
