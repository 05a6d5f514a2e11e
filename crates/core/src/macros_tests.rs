// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#[derive(Debug)]
enum Phase {
    Warmup,
    Main(u32),
}

crate::simple_display! {
    Phase {
        Warmup => "warmup",
        Main(..) => "main",
    }
}

#[derive(Debug, Default, PartialEq)]
struct Settings {
    retries: u32,
    limit: Option<usize>,
}

impl Settings {
    crate::setters! {
        set { retries: u32, limit: Option<usize> }
    }
}

#[test]
fn simple_display_maps_variants() {
    assert_eq!(Phase::Warmup.to_string(), "warmup");
    assert_eq!(Phase::Main(3).to_string(), "main");
}

#[test]
fn setters_chain() {
    let settings = Settings::default().retries(2).limit(Some(10));
    assert_eq!(settings, Settings { retries: 2, limit: Some(10) });
}
