use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use tokio::time::Instant;

use crate::config::SourceConfig;
use crate::data::{FetchError, PriceSource};

/// Re-fetch cadence while waiting for the readiness marker.
const READINESS_POLL: Duration = Duration::from_millis(500);

/// Inner text of every element whose class mentions "price", document order.
const PRICE_SPAN_PATTERN: &str = r#"(?s)<span[^>]*class="[^"]*price[^"]*"[^>]*>(.*?)</span>"#;
const TAG_PATTERN: &str = r"<[^>]+>";

/// Plain-HTTP binding of [`PriceSource`].
///
/// The original page populates its price spans client-side, so a single GET
/// may race the data: the fetch keeps re-requesting until the readiness
/// marker appears in the body, waits out the settle delay, then reads the
/// price spans from a final fetch. The HTTP client is reused across polls;
/// nothing heavier is held between iterations.
pub struct HttpPriceSource {
    client: Client,
    config: SourceConfig,
    span_pattern: Regex,
    tag_pattern: Regex,
}

impl HttpPriceSource {
    pub fn new(config: SourceConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            client: Client::new(),
            config,
            span_pattern: Regex::new(PRICE_SPAN_PATTERN)?,
            tag_pattern: Regex::new(TAG_PATTERN)?,
        })
    }

    async fn get_page(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.config.url)
            .header("User-Agent", "silverwatch/0.1")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// Bounded wait for the readiness marker to show up in the page body.
    async fn await_readiness(&self) -> Result<(), FetchError> {
        let deadline = Instant::now() + Duration::from_secs(self.config.readiness_timeout_secs);

        loop {
            let body = self.get_page().await?;
            if body.contains(&self.config.readiness_marker) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(FetchError::ReadinessTimeout {
                    marker: self.config.readiness_marker.clone(),
                    timeout_secs: self.config.readiness_timeout_secs,
                });
            }
            tokio::time::sleep(READINESS_POLL).await;
        }
    }

    fn price_fragments(&self, body: &str) -> Vec<String> {
        self.span_pattern
            .captures_iter(body)
            .map(|cap| {
                let inner = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
                self.tag_pattern.replace_all(inner, " ").trim().to_string()
            })
            .collect()
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch(&self) -> Result<Vec<String>, FetchError> {
        self.await_readiness().await?;

        // Give client-side rendering time to finish filling the spans.
        tokio::time::sleep(Duration::from_secs(self.config.settle_delay_secs)).await;

        let body = self.get_page().await?;
        Ok(self.price_fragments(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpPriceSource {
        HttpPriceSource::new(SourceConfig {
            url: "https://auragold.in".to_string(),
            readiness_marker: "Live Silver Price".to_string(),
            readiness_timeout_secs: 25,
            settle_delay_secs: 3,
        })
        .unwrap()
    }

    #[test]
    fn test_price_fragments_document_order() {
        let body = r#"
            <h1>Live Silver Price</h1>
            <div><span class="price">Gold ₹<b>9,123.45</b>/gm</span></div>
            <div><span class="live-price">Silver ₹182.30/gm</span></div>
        "#;

        let fragments = source().price_fragments(body);
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].contains("9,123.45"));
        assert!(fragments[1].contains("182.30"));
    }

    #[test]
    fn test_price_fragments_strip_nested_tags() {
        let body = r#"<span class="price"><i>₹</i>182.30</span>"#;
        let fragments = source().price_fragments(body);
        assert_eq!(fragments, vec!["₹ 182.30".to_string()]);
    }

    #[test]
    fn test_price_fragments_ignore_unrelated_spans() {
        let body = r#"<span class="label">Silver</span><span class="price">182.30</span>"#;
        let fragments = source().price_fragments(body);
        assert_eq!(fragments, vec!["182.30".to_string()]);
    }
}
