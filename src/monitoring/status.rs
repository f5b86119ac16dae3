use tokio::sync::watch;

/// Build the current-status cell: a single writer on the poll task, a
/// single reader on the display task. Network waits on the poll side never
/// block presentation.
pub fn status_cell(initial: &str) -> (StatusPublisher, StatusDisplay) {
    let (tx, rx) = watch::channel(initial.to_string());
    (StatusPublisher { tx }, StatusDisplay { rx })
}

pub struct StatusPublisher {
    tx: watch::Sender<String>,
}

impl StatusPublisher {
    pub fn set_text(&self, text: impl Into<String>) {
        // A closed display only means nobody is watching; keep polling.
        let _ = self.tx.send(text.into());
    }
}

pub struct StatusDisplay {
    rx: watch::Receiver<String>,
}

impl StatusDisplay {
    /// Render every status update until the publisher goes away.
    pub async fn run(mut self) {
        println!("{}", self.rx.borrow_and_update().clone());

        while self.rx.changed().await.is_ok() {
            let text = self.rx.borrow_and_update().clone();
            println!("{text}");
        }
    }

    /// Latest status text without waiting for a change.
    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_text() {
        let (_publisher, display) = status_cell("Fetching silver price...");
        assert_eq!(display.current(), "Fetching silver price...");
    }

    #[test]
    fn test_set_text_reaches_display() {
        let (publisher, display) = status_cell("starting");
        publisher.set_text("Current Silver Price: ₹182.30/gm");
        assert_eq!(display.current(), "Current Silver Price: ₹182.30/gm");
    }

    #[test]
    fn test_set_text_survives_dropped_display() {
        let (publisher, display) = status_cell("starting");
        drop(display);
        publisher.set_text("Error: page fetch failed");
    }
}
