//! Session configuration.
//!
//! Defaults come from the shared constants. The binary can override them with
//! environment variables:
//!
//! - `TUI_2048_SEED`: RNG seed for tile spawns (default: random)
//! - `TUI_2048_ANIMATION_STEPS`: interpolation frames per move (default: 8, `0` disables)
//! - `TUI_2048_FRAME_MS`: delay between animation frames (default: 12)
//! - `TUI_2048_LOG`: file to write logs to (default: logging off)
//!
//! Values are fixed once a session starts.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::types::{ANIMATION_FRAME_MS, DEFAULT_ANIMATION_STEPS};

pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_ANIMATION_STEPS: &str = "TUI_2048_ANIMATION_STEPS";
pub const ENV_FRAME_MS: &str = "TUI_2048_FRAME_MS";
pub const ENV_LOG: &str = "TUI_2048_LOG";

/// Upper bound for `TUI_2048_ANIMATION_STEPS`; more frames than this only slows play.
pub const MAX_ANIMATION_STEPS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub animation_steps: u32,
    pub frame_ms: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            frame_ms: ANIMATION_FRAME_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_SEED) {
            config.seed = Some(parse_num(ENV_SEED, &v, "u64 seed")?);
        }
        if let Some(v) = lookup(ENV_ANIMATION_STEPS) {
            let steps: u32 = parse_num(ENV_ANIMATION_STEPS, &v, "step count")?;
            if steps > MAX_ANIMATION_STEPS {
                return Err(ConfigError::Invalid {
                    var: ENV_ANIMATION_STEPS,
                    value: v,
                    expected: "step count (0..=120)",
                });
            }
            config.animation_steps = steps;
        }
        if let Some(v) = lookup(ENV_FRAME_MS) {
            config.frame_ms = parse_num(ENV_FRAME_MS, &v, "millisecond delay")?;
        }
        if let Some(v) = lookup(ENV_LOG) {
            if !v.trim().is_empty() {
                config.log_file = Some(PathBuf::from(v));
            }
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_animation_steps(mut self, steps: u32) -> Self {
        self.animation_steps = steps;
        self
    }
}

fn parse_num<T: std::str::FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
        expected,
    })
}
