use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::display::commands::DEFAULT_ADDRESS;
use crate::display::font::FONTS;
use crate::display::panel::PanelVariant;

/// Panel and bus settings applied when the driver starts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    pub panel: PanelVariant,

    // Optional overrides applied after the init sequence
    pub contrast: Option<u8>,
    pub invert: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,

    /// Index into the font registry selected at startup
    pub font: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            panel: PanelVariant::Oled128x64,
            contrast: None,
            invert: false,
            flip_horizontal: false,
            flip_vertical: false,
            font: 0,
        }
    }
}

impl DisplayConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DisplayConfig = serde_json::from_str(json).context("malformed display config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.address > 0x7F {
            bail!("I2C address 0x{:02x} is not a 7-bit address", self.address);
        }
        if self.font as usize >= FONTS.len() {
            bail!(
                "font index {} out of range ({} fonts registered)",
                self.font,
                FONTS.len()
            );
        }
        Ok(())
    }

    pub fn width(&self) -> u16 {
        self.panel.width()
    }

    pub fn height(&self) -> u16 {
        self.panel.height()
    }
}

/// Read the config at `path`, falling back to defaults when it is absent or bad
pub fn load_or_default(path: Option<&Path>) -> DisplayConfig {
    let Some(path) = path else {
        log::info!("No config file given, using defaults");
        return DisplayConfig::default();
    };

    match load_from_file(path) {
        Ok(config) => {
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Failed to load config from {}: {:?}, using defaults", path.display(), e);
            DisplayConfig::default()
        }
    }
}

fn load_from_file(path: &Path) -> Result<DisplayConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    DisplayConfig::from_json(&text)
}
