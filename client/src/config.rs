use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use libgame::AutoAdvanceConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u64,

    /// Grayscale values at or above this seed a live cell.
    pub alive_threshold: u8,

    pub auto_advance: AutoAdvanceSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 900,
            target_fps: 60,
            alive_threshold: 127,
            auto_advance: AutoAdvanceSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoAdvanceSettings {
    pub min_interval_secs: f64,
    pub max_interval_secs: f64,
    pub step_delta_secs: f64,
    pub initial_interval_secs: f64,
    pub start_enabled: bool,
}

impl Default for AutoAdvanceSettings {
    fn default() -> Self {
        Self {
            min_interval_secs: 0.25,
            max_interval_secs: 2.0,
            step_delta_secs: 0.25,
            initial_interval_secs: 0.5,
            start_enabled: false,
        }
    }
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn auto_advance_config(&self) -> anyhow::Result<AutoAdvanceConfig> {
        let settings = &self.auto_advance;

        let secs = |name: &str, value: f64| {
            Duration::try_from_secs_f64(value)
                .with_context(|| format!("Invalid auto_advance.{name}: {value}"))
        };

        Ok(AutoAdvanceConfig {
            min_interval: secs("min_interval_secs", settings.min_interval_secs)?,
            max_interval: secs("max_interval_secs", settings.max_interval_secs)?,
            step_delta: secs("step_delta_secs", settings.step_delta_secs)?,
            initial_interval: secs("initial_interval_secs", settings.initial_interval_secs)?,
            start_enabled: settings.start_enabled,
        })
    }
}
