use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Ambient configuration for the flows.
///
/// Loaded from `config.toml` in the working directory when present, then
/// overridden by environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Delay applied by the simulated OTP gateway, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
    /// Directory the file-backed session store writes under.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn default_delay_ms() -> u64 {
    1000
}

fn default_storage_dir() -> PathBuf {
    brainbuddy_dir()
}

fn brainbuddy_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".brainbuddy")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        let mut config = AppConfig {
            simulated_delay_ms: default_delay_ms(),
            storage_dir: default_storage_dir(),
        };

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<AppConfig>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(delay) = std::env::var("BRAINBUDDY_DELAY_MS") {
            if let Ok(delay) = delay.trim().parse() {
                config.simulated_delay_ms = delay;
            }
        }
        if let Ok(dir) = std::env::var("BRAINBUDDY_STORAGE_DIR") {
            if !dir.trim().is_empty() {
                config.storage_dir = PathBuf::from(dir);
            }
        }

        config
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig {
            simulated_delay_ms: default_delay_ms(),
            storage_dir: default_storage_dir(),
        };
        assert_eq!(config.simulated_delay(), Duration::from_millis(1000));
        assert!(config.storage_dir.ends_with(".brainbuddy"));
    }

    #[test]
    fn test_toml_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("simulated_delay_ms = 25").unwrap();
        assert_eq!(config.simulated_delay_ms, 25);
        assert!(config.storage_dir.ends_with(".brainbuddy"));
    }
}
