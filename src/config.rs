use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub signal: SignalConfig,
    pub poll: PollConfig,
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub readiness_marker: String,
    pub readiness_timeout_secs: u64,
    pub settle_delay_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    pub buy_threshold: f64,
    pub sell_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    pub telegram_enabled: bool,
    #[serde(default = "default_console_enabled")]
    pub console_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub csv_logging: bool,
    #[serde(default = "default_csv_log_path")]
    pub csv_log_path: String,
}

fn default_console_enabled() -> bool { true }
fn default_csv_log_path() -> String { "alerts.csv".to_string() }

/// Threshold ordering is checked before the poll loop ever starts; a
/// process with `buy >= sell` must not begin monitoring.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid thresholds: buy {buy:.2} must be strictly below sell {sell:.2}")]
    InvalidThresholds { buy: f64, sell: f64 },
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl EnvConfig {
    pub fn load() -> Self {
        dotenv::dotenv().ok();

        Self {
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [source]
            url = "https://auragold.in"
            readiness_marker = "Live Silver Price"
            readiness_timeout_secs = 25
            settle_delay_secs = 3

            [signal]
            buy_threshold = 180.0
            sell_threshold = 185.0

            [poll]
            interval_secs = 300

            [notifications]
            telegram_enabled = true
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.readiness_marker, "Live Silver Price");
        assert_eq!(config.signal.buy_threshold, 180.0);
        assert_eq!(config.poll.interval_secs, 300);
        // Omitted sections and fields fall back to defaults
        assert!(config.notifications.console_enabled);
        assert!(!config.monitoring.csv_logging);
        assert_eq!(config.monitoring.csv_log_path, "");
    }
}
