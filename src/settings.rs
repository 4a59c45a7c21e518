//! Runtime settings for the headless driver
//!
//! Read from an optional JSON file. Missing fields take their defaults, and a
//! missing or broken file falls back to the defaults entirely.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_RATE_HZ;

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed tick rate
    pub frame_rate_hz: u32,
    /// Stop after this many ticks (0 = run until quit)
    pub max_frames: u64,
    /// Emit every snapshot as JSON at trace level
    pub log_snapshots: bool,
    /// Sleep to frame boundaries and read the monotonic clock. When false
    /// the clock advances exactly one frame interval per tick.
    pub real_time: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            max_frames: 900,
            log_snapshots: false,
            real_time: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load from a settings file, or use defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Self::from_json(&json).map_err(|e| e.to_string()));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Settings {} unusable ({}); using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Time between ticks. A zero rate is treated as 1 Hz.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate_hz.max(1)))
    }
}
