use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::data::resolver::{PriceResolver, ResolveError};
use crate::data::types::PriceObservation;
use crate::data::{FetchError, PriceSource};
use crate::monitoring::logger::AlertLog;
use crate::monitoring::status::StatusPublisher;
use crate::notify::NotificationSink;
use crate::strategies::threshold::ThresholdEngine;
use crate::strategies::types::Alert;

#[derive(Debug, thiserror::Error)]
pub enum TickError {
    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),
}

/// The monitoring orchestrator.
///
/// One dedicated task runs fetch → resolve → evaluate → notify on a fixed
/// cadence. Every failure inside a tick is recoverable: it is surfaced on
/// the status display, leaves the signal engine untouched, and the loop
/// sleeps and tries again. Only the shutdown flag ends the loop.
pub struct PollLoop<S: PriceSource> {
    source: S,
    resolver: PriceResolver,
    engine: ThresholdEngine,
    sinks: Vec<Box<dyn NotificationSink>>,
    status: StatusPublisher,
    alert_log: Option<AlertLog>,
    interval: Duration,
    shutdown: watch::Receiver<bool>,
}

impl<S: PriceSource> PollLoop<S> {
    pub fn new(
        source: S,
        resolver: PriceResolver,
        engine: ThresholdEngine,
        sinks: Vec<Box<dyn NotificationSink>>,
        status: StatusPublisher,
        alert_log: Option<AlertLog>,
        interval: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            resolver,
            engine,
            sinks,
            status,
            alert_log,
            interval,
            shutdown,
        }
    }

    pub async fn run(mut self) {
        loop {
            if *self.shutdown.borrow() {
                break;
            }

            self.tick().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Poll loop stopped");
    }

    /// One fetch → resolve → evaluate → notify cycle.
    async fn tick(&mut self) {
        match self.observe().await {
            Ok(observation) => {
                info!("Silver price: ₹{:.2}/gm", observation.value);
                self.status
                    .set_text(format!("Current Silver Price: ₹{:.2}/gm", observation.value));

                if let Some(alert) = self.engine.evaluate(&observation) {
                    self.dispatch(&alert).await;
                }
            }
            Err(e) => {
                warn!("Poll iteration failed: {e}");
                self.status.set_text(format!("Error: {e}"));
            }
        }
    }

    async fn observe(&self) -> Result<PriceObservation, TickError> {
        let fragments = self.source.fetch().await?;
        let value = self.resolver.resolve(&fragments)?;
        Ok(PriceObservation::now(value))
    }

    async fn dispatch(&self, alert: &Alert) {
        info!("Signal transition: {:?} at ₹{:.2}/gm", alert.kind, alert.price);

        for sink in &self.sinks {
            if let Err(e) = sink.send(alert.title(), &alert.message()).await {
                warn!("Notification via {} failed: {e:#}", sink.name());
            }
        }

        if let Some(log) = &self.alert_log {
            if let Err(e) = log.log_alert(alert) {
                warn!("Failed to append alert log: {e:#}");
            }
        }
    }
}
