use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::ColorLayout;
use crate::output::SerialPin;
use crate::strobe::DEFAULT_STROBE_BRIGHTNESS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub output: OutputConfig,
    #[serde(default)]
    pub strobe: StrobeConfig,
    /// Initial logical colors, packed `0xWWRRGGBB`, starting at pixel 0.
    #[serde(default)]
    pub pixels: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(flatten)]
    pub serial: SerialPin,
    pub pixel_count: usize,
    /// Layout tag such as `GRB+KHZ800` or `GRBW`.
    #[serde(default)]
    pub color_layout: ColorLayout,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StrobeConfig {
    #[serde(default = "default_brightness")]
    pub brightness: u8,
    /// Half period of the `blink` command.
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

fn default_brightness() -> u8 {
    DEFAULT_STROBE_BRIGHTNESS
}

fn default_period_ms() -> u64 {
    100
}

impl Default for StrobeConfig {
    fn default() -> Self {
        StrobeConfig {
            brightness: default_brightness(),
            period_ms: default_period_ms(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}
