use chrono::{DateTime, Utc};

/// One successfully resolved price. Built per poll cycle, handed to the
/// signal engine once, never persisted.
#[derive(Debug, Clone)]
pub struct PriceObservation {
    pub value: f64,
    pub at: DateTime<Utc>,
}

impl PriceObservation {
    pub fn now(value: f64) -> Self {
        Self {
            value,
            at: Utc::now(),
        }
    }
}
