use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;

use crate::strategies::types::Alert;

/// Append-only CSV audit trail of emitted alerts.
pub struct AlertLog {
    log_path: String,
}

impl AlertLog {
    pub fn new(log_path: String) -> Result<Self> {
        // Create CSV file with headers if it doesn't exist
        if !std::path::Path::new(&log_path).exists() {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .open(&log_path)?;

            writeln!(file, "timestamp,kind,price")?;
        }

        Ok(Self { log_path })
    }

    pub fn log_alert(&self, alert: &Alert) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.log_path)?;

        writeln!(
            file,
            "{},{:?},{:.2}",
            alert.at.to_rfc3339(),
            alert.kind,
            alert.price
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::types::AlertKind;
    use chrono::Utc;

    #[test]
    fn test_header_then_rows() {
        let path = std::env::temp_dir().join("silverwatch_alert_log_test.csv");
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        let log = AlertLog::new(path_str.clone()).unwrap();
        log.log_alert(&Alert {
            kind: AlertKind::Sell,
            price: 186.0,
            at: Utc::now(),
        })
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("timestamp,kind,price"));
        let row = lines.next().unwrap();
        assert!(row.ends_with(",Sell,186.00"));

        let _ = std::fs::remove_file(&path);
    }
}
