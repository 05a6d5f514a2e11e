// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ExecutionOutcome;

#[test]
fn new_record_has_fresh_id() {
    let result = ExecutionResult::compose(ExecutionOutcome::success("1"), vec![]);
    let a = AttemptRecord::new("console.log(1)", result.clone(), 10);
    let b = AttemptRecord::new("console.log(1)", result, 10);
    assert_ne!(a.id, b.id);
    assert!(a.id.as_str().starts_with(AttemptId::PREFIX));
    assert_eq!(a.elapsed_since_previous_ms, None);
}

#[test]
fn record_round_trips_through_json() {
    let result = ExecutionResult::compose(ExecutionOutcome::success("ok"), vec![]);
    let record = AttemptRecord::new("src", result, 5).with_elapsed(Some(1200));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["elapsedSincePreviousMs"], 1200);
    assert_eq!(json["recordedAtMs"], 5);
    let back: AttemptRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
