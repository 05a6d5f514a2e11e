// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashSet;

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId("tst-");
}

#[test]
fn new_ids_carry_prefix_and_are_unique() {
    let ids: HashSet<TestId> = (0..50).map(|_| TestId::new()).collect();
    assert_eq!(ids.len(), 50);
    for id in &ids {
        assert!(id.as_str().starts_with("tst-"));
        assert_eq!(id.suffix().len(), 32);
    }
}

#[test]
fn from_string_keeps_text() {
    let id = TestId::from("tst-abc");
    assert_eq!(id.to_string(), "tst-abc");
    assert_eq!(id.suffix(), "abc");
    assert_eq!(TestId::from_string("plain").suffix(), "plain");
}

#[test]
fn serializes_transparently() {
    let id = TestId::from("tst-1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"tst-1\"");
}
