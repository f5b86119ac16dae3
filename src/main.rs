mod config;
mod data;
mod monitoring;
mod notify;
mod poll;
mod strategies;

use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, EnvConfig};
use data::resolver::PriceResolver;
use data::source::HttpPriceSource;
use monitoring::logger::AlertLog;
use monitoring::status::status_cell;
use notify::console::ConsoleNotifier;
use notify::telegram::TelegramNotifier;
use notify::NotificationSink;
use poll::PollLoop;
use strategies::threshold::ThresholdEngine;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("🥈 Silver monitor starting...");

    // Load configuration
    tracing::info!("Loading configuration...");
    let config = Config::load("config.toml")?;
    let env_config = EnvConfig::load();

    // Invalid thresholds must never reach the poll loop
    let engine = ThresholdEngine::new(config.signal.buy_threshold, config.signal.sell_threshold)?;

    tracing::info!("Watching {}", config.source.url);
    tracing::info!(
        "Thresholds: buy at ₹{:.2}/gm, sell at ₹{:.2}/gm",
        config.signal.buy_threshold,
        config.signal.sell_threshold
    );
    tracing::info!("Poll interval: {}s", config.poll.interval_secs);

    let source = HttpPriceSource::new(config.source.clone())?;
    let resolver = PriceResolver::new()?;

    let mut sinks: Vec<Box<dyn NotificationSink>> = Vec::new();
    if config.notifications.telegram_enabled {
        let bot_token = env_config
            .telegram_bot_token
            .context("TELEGRAM_BOT_TOKEN not set")?;
        let chat_id = env_config
            .telegram_chat_id
            .context("TELEGRAM_CHAT_ID not set")?;
        sinks.push(Box::new(TelegramNotifier::new(bot_token, chat_id)));
        tracing::info!("Telegram notifications enabled");
    }
    if config.notifications.console_enabled {
        sinks.push(Box::new(ConsoleNotifier));
    }
    if sinks.is_empty() {
        tracing::warn!("No notification sinks configured; alerts only reach the status display");
    }

    let alert_log = if config.monitoring.csv_logging {
        tracing::info!("Alert audit log: {}", config.monitoring.csv_log_path);
        Some(AlertLog::new(config.monitoring.csv_log_path.clone())?)
    } else {
        None
    };

    let (status, display) = status_cell("Fetching silver price...");
    let display_task = tokio::spawn(display.run());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poll_loop = PollLoop::new(
        source,
        resolver,
        engine,
        sinks,
        status,
        alert_log,
        Duration::from_secs(config.poll.interval_secs),
        shutdown_rx,
    );
    let poll_task = tokio::spawn(poll_loop.run());

    tracing::info!("✅ Monitor running, waiting for signal transitions...");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    let _ = shutdown_tx.send(true);
    let _ = poll_task.await;
    // The poll task owned the status publisher, so the display drains and exits
    let _ = display_task.await;

    Ok(())
}
