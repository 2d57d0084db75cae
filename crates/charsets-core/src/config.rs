use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::charset::StandardCharset;

pub fn default_charset() -> StandardCharset {
    StandardCharset::Utf8
}

pub fn get_false() -> bool {
    false
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_charset")]
    pub default_charset: StandardCharset,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "get_false")]
    pub show_aliases: bool,
}

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Config {
    pub const DEFAULT: &str = include_str!("../../../config/charsets.toml");

    pub fn create_default_config(overwrite: bool) -> Result<PathBuf> {
        let config = Self::get_default_location()?;
        Self::write_default(&config, overwrite)?;
        Ok(config)
    }

    pub fn write_default(path: impl AsRef<Path>, overwrite: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(config_folder) = path.parent() {
            if !config_folder.exists() {
                fs::create_dir_all(config_folder)?;
            }
        }

        if !path.exists() || overwrite {
            fs::write(path, Self::DEFAULT)?;
            tracing::info!("Wrote default config to `{}`", path.display());
        }

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = toml::from_str(&fs::read_to_string(path)?)?;
        tracing::debug!("Loaded config from `{}`", path.display());
        Ok(config)
    }

    pub fn load_from_default_location() -> Result<Self> {
        let path = Self::get_default_location()?;
        if !path.exists() {
            tracing::debug!(
                "No config at `{}`, using default config",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn get_default_location() -> Result<PathBuf> {
        let Some(directories) = directories::ProjectDirs::from("", "", "charsets") else {
            return Err(anyhow::Error::msg("Unable to find project directory"));
        };
        Ok(directories.config_dir().join("charsets.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(Self::DEFAULT).unwrap()
    }
}
