//! Application configuration.

use crate::consts::cli_consts::{feed, voting};
use crate::elements::ElementId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Interval between live donations, in milliseconds.
    pub feed_interval_ms: u64,
    /// Voting power the viewer starts with.
    pub voting_power: u64,
    /// Fixed seed for the mock data; random when absent.
    pub seed: Option<u64>,
    /// Paint the page background.
    pub with_background_color: bool,
    /// Elements left out of the page markup.
    pub hidden_elements: Vec<ElementId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_interval_ms: feed::TICK_INTERVAL_MS,
            voting_power: voting::DEFAULT_VOTING_POWER,
            seed: None,
            with_background_color: false,
            hidden_elements: Vec::new(),
        }
    }
}

/// Default config location: `~/.stkr/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    Ok(home.join(".stkr").join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
