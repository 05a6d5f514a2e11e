// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_moves_forward() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(2));
    assert!(clock.elapsed_ms(t1) >= 1);
    assert!(clock.epoch_ms() > 1_600_000_000_000);
}

#[test]
fn fake_clock_advances_both_clocks() {
    let clock = FakeClock::new();
    let start = clock.now();
    let epoch = clock.epoch_ms();
    clock.advance(Duration::from_millis(1500));
    assert_eq!(clock.elapsed_ms(start), 1500);
    assert_eq!(clock.epoch_ms(), epoch + 1500);
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::default();
    let other = clock.clone();
    let start = clock.now();
    other.advance(Duration::from_secs(30));
    assert_eq!(clock.elapsed_ms(start), 30_000);
}

#[test]
fn elapsed_saturates_for_future_instants() {
    let clock = FakeClock::new();
    let later = clock.now() + Duration::from_secs(5);
    assert_eq!(clock.elapsed_ms(later), 0);
}

#[test]
fn set_epoch_ms() {
    let clock = FakeClock::new();
    clock.set_epoch_ms(42);
    assert_eq!(clock.epoch_ms(), 42);
}
