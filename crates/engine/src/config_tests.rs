// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::io::Write;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.max_call_depth, 2000);
    assert_eq!(config.max_output_lines, 10_000);
    assert_eq!(config.worker_stack_bytes, 256 * 1024 * 1024);
}

#[test]
fn setters_chain() {
    let config = EngineConfig::default().timeout(None).max_call_depth(10).max_output_lines(3);
    assert_eq!(config.timeout, None);
    assert_eq!(config.max_call_depth, 10);
    assert_eq!(config.max_output_lines, 3);
}

#[test]
fn env_overrides_apply() {
    let config = EngineConfig::default()
        .with_env_overrides(lookup(&[
            ("KATA_EXEC_TIMEOUT_MS", "250"),
            ("KATA_MAX_CALL_DEPTH", "64"),
            ("KATA_MAX_OUTPUT_LINES", " 12 "),
            ("KATA_WORKER_STACK_BYTES", "8388608"),
        ]))
        .unwrap();
    assert_eq!(config.timeout, Some(Duration::from_millis(250)));
    assert_eq!(config.max_call_depth, 64);
    assert_eq!(config.max_output_lines, 12);
    assert_eq!(config.worker_stack_bytes, 8 * 1024 * 1024);
}

#[test]
fn zero_timeout_disables_deadline() {
    let config =
        EngineConfig::default().with_env_overrides(lookup(&[("KATA_EXEC_TIMEOUT_MS", "0")])).unwrap();
    assert_eq!(config.timeout, None);
}

#[test]
fn empty_env_value_is_ignored() {
    let config =
        EngineConfig::default().with_env_overrides(lookup(&[("KATA_MAX_CALL_DEPTH", "")])).unwrap();
    assert_eq!(config.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
}

#[yare::parameterized(
    not_a_number = { "KATA_EXEC_TIMEOUT_MS", "soon" },
    negative = { "KATA_MAX_CALL_DEPTH", "-1" },
    zero_depth = { "KATA_MAX_CALL_DEPTH", "0" },
    zero_lines = { "KATA_MAX_OUTPUT_LINES", "0" },
    tiny_stack = { "KATA_WORKER_STACK_BYTES", "4096" },
)]
fn env_rejects(key: &str, value: &str) {
    let err = EngineConfig::default().with_env_overrides(lookup(&[(key, value)])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }), "{err}");
}

#[test]
fn toml_values() {
    let config = EngineConfig::from_toml_str("timeout_ms = 1500\nmax_output_lines = 50\n").unwrap();
    assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    assert_eq!(config.max_output_lines, 50);
    assert_eq!(config.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
}

#[test]
fn toml_rejects_unknown_keys() {
    let err = EngineConfig::from_toml_str("timeout = 5").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
#[serial]
fn load_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = 0\nmax_call_depth = 300").unwrap();

    std::env::set_var("KATA_MAX_CALL_DEPTH", "400");
    let config = EngineConfig::load(file.path());
    std::env::remove_var("KATA_MAX_CALL_DEPTH");

    let config = config.unwrap();
    assert_eq!(config.timeout, None);
    assert_eq!(config.max_call_depth, 400);
}

#[test]
#[serial]
fn from_env_reads_process_environment() {
    std::env::set_var("KATA_MAX_OUTPUT_LINES", "7");
    let config = EngineConfig::from_env();
    std::env::remove_var("KATA_MAX_OUTPUT_LINES");
    assert_eq!(config.unwrap().max_output_lines, 7);
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::load(&dir.path().join("engine.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
