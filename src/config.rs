use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Default for ColorChoice {
    fn default() -> Self {
        ColorChoice::Auto
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "Invalid color choice: {}. Must be 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Persistent settings, read from `~/.gum/config.json` when present.
/// Command-line flags override anything set here.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub color: ColorChoice,
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// A missing or unreadable file just means defaults.
    pub fn load() -> Self {
        let config_path = get_config_path();
        if !config_path.exists() {
            return Config::default();
        }
        let contents = fs::read_to_string(&config_path).unwrap_or_default();
        serde_json::from_str(&contents).unwrap_or_default()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Ok(custom_path) = env::var("GUM_CONFIG") {
        return PathBuf::from(custom_path);
    }
    let home = if cfg!(windows) {
        env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
    } else {
        env::var("HOME").unwrap_or_else(|_| ".".to_string())
    };
    PathBuf::from(home).join(".gum").join("config.json")
}
