// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine limits: defaults, TOML files, and environment overrides.
//!
//! Environment variables win over file values:
//!
//! | variable | meaning |
//! |---|---|
//! | `KATA_EXEC_TIMEOUT_MS` | wall-clock limit per run, `0` disables |
//! | `KATA_MAX_CALL_DEPTH` | nested calls before `RangeError` |
//! | `KATA_MAX_OUTPUT_LINES` | captured lines before the run is stopped |
//! | `KATA_WORKER_STACK_BYTES` | stack size of the script worker thread |

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_CALL_DEPTH: usize = kata_script::exec::DEFAULT_MAX_CALL_DEPTH;
pub const DEFAULT_MAX_OUTPUT_LINES: usize = 10_000;
pub const DEFAULT_WORKER_STACK_BYTES: usize = 256 * 1024 * 1024;

/// Smallest worker stack accepted; below this the call depth limit cannot
/// be reached before the thread overflows.
const MIN_WORKER_STACK_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub timeout: Option<Duration>,
    pub max_call_depth: usize,
    pub max_output_lines: usize,
    pub worker_stack_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_output_lines: DEFAULT_MAX_OUTPUT_LINES,
            worker_stack_bytes: DEFAULT_WORKER_STACK_BYTES,
        }
    }
}

/// On-disk form. Every key is optional; `timeout_ms = 0` disables the deadline.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    timeout_ms: Option<u64>,
    max_call_depth: Option<usize>,
    max_output_lines: Option<usize>,
    worker_stack_bytes: Option<usize>,
}

impl EngineConfig {
    kata_core::setters! {
        set {
            timeout: Option<Duration>,
            max_call_depth: usize,
            max_output_lines: usize,
            worker_stack_bytes: usize,
        }
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Read a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&input)?.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(input)?;
        let mut config = Self::default();
        if let Some(ms) = file.timeout_ms {
            config.timeout = timeout_from_ms(ms);
        }
        if let Some(depth) = file.max_call_depth {
            config.max_call_depth = depth;
        }
        if let Some(lines) = file.max_output_lines {
            config.max_output_lines = lines;
        }
        if let Some(bytes) = file.worker_stack_bytes {
            config.worker_stack_bytes = bytes;
        }
        config.validate()
    }

    /// Apply `KATA_*` overrides read through `lookup`.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(ms) = parse_var::<u64>(&lookup, "KATA_EXEC_TIMEOUT_MS")? {
            self.timeout = timeout_from_ms(ms);
        }
        if let Some(depth) = parse_var(&lookup, "KATA_MAX_CALL_DEPTH")? {
            self.max_call_depth = depth;
        }
        if let Some(lines) = parse_var(&lookup, "KATA_MAX_OUTPUT_LINES")? {
            self.max_output_lines = lines;
        }
        if let Some(bytes) = parse_var(&lookup, "KATA_WORKER_STACK_BYTES")? {
            self.worker_stack_bytes = bytes;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let invalid = |key: &str, value: usize| ConfigError::Invalid { key: key.to_string(), value: value.to_string() };
        if self.max_call_depth == 0 {
            return Err(invalid("max_call_depth", 0));
        }
        if self.max_output_lines == 0 {
            return Err(invalid("max_output_lines", 0));
        }
        if self.worker_stack_bytes < MIN_WORKER_STACK_BYTES {
            return Err(invalid("worker_stack_bytes", self.worker_stack_bytes));
        }
        Ok(self)
    }
}

fn timeout_from_ms(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { key: key.to_string(), value: raw.to_string() })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
