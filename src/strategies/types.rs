use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Buy,
    Sell,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub price: f64,
    pub at: DateTime<Utc>,
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::Buy => "📉 BUY NOW",
            AlertKind::Sell => "📈 SELL NOW",
        }
    }

    pub fn message(&self) -> String {
        format!("Silver Price: ₹{:.2}/gm", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_formatting() {
        let alert = Alert {
            kind: AlertKind::Buy,
            price: 179.5,
            at: Utc::now(),
        };
        assert_eq!(alert.title(), "📉 BUY NOW");
        assert_eq!(alert.message(), "Silver Price: ₹179.50/gm");

        let alert = Alert {
            kind: AlertKind::Sell,
            price: 186.0,
            at: Utc::now(),
        };
        assert_eq!(alert.title(), "📈 SELL NOW");
        assert_eq!(alert.message(), "Silver Price: ₹186.00/gm");
    }
}
