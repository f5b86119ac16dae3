use crate::config::ConfigError;
use crate::data::types::PriceObservation;
use crate::strategies::types::{Alert, AlertKind};

/// Two-threshold signal engine.
///
/// Edge-triggered: an alert fires on the transition into the buy or sell
/// zone and is suppressed while `last_signal` already matches that kind.
/// The neutral band between the thresholds never resets state, so
/// oscillation across the band re-fires each direction once per sustained
/// crossing. One engine instance per monitored instrument; state lives in
/// memory for the process lifetime.
#[derive(Debug)]
pub struct ThresholdEngine {
    buy: f64,
    sell: f64,
    last_signal: Option<AlertKind>,
}

impl ThresholdEngine {
    pub fn new(buy: f64, sell: f64) -> Result<Self, ConfigError> {
        if buy >= sell {
            return Err(ConfigError::InvalidThresholds { buy, sell });
        }

        Ok(Self {
            buy,
            sell,
            last_signal: None,
        })
    }

    /// Convert one observation into at most one notification-worthy
    /// transition.
    pub fn evaluate(&mut self, observation: &PriceObservation) -> Option<Alert> {
        let kind = if observation.value <= self.buy {
            AlertKind::Buy
        } else if observation.value >= self.sell {
            AlertKind::Sell
        } else {
            return None;
        };

        if self.last_signal == Some(kind) {
            return None;
        }
        self.last_signal = Some(kind);

        Some(Alert {
            kind,
            price: observation.value,
            at: observation.at,
        })
    }

    pub fn last_signal(&self) -> Option<AlertKind> {
        self.last_signal
    }
}
