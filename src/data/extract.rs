use regex::Regex;

/// First run of `digits(.digits)?` wins. Commas are grouping separators and
/// are stripped before matching; no other locale handling.
const NUMBER_PATTERN: &str = r"[0-9]+(?:\.[0-9]+)?";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No number found in: {0}")]
    NoNumber(String),

    #[error("Unparseable number: {0}")]
    Malformed(String),
}

pub struct NumericExtractor {
    pattern: Regex,
}

impl NumericExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(NUMBER_PATTERN)?,
        })
    }

    /// Pull the first numeric value out of free-form rendered price text.
    pub fn extract(&self, text: &str) -> Result<f64, ParseError> {
        let cleaned = text.replace(',', "");

        let matched = self
            .pattern
            .find(&cleaned)
            .ok_or_else(|| ParseError::NoNumber(text.to_string()))?;

        matched
            .as_str()
            .parse::<f64>()
            .map_err(|_| ParseError::Malformed(matched.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> NumericExtractor {
        NumericExtractor::new().unwrap()
    }

    #[test]
    fn test_extract_plain_decimal() {
        assert_eq!(extractor().extract("₹182.30").unwrap(), 182.30);
    }

    #[test]
    fn test_extract_strips_grouping_commas() {
        assert_eq!(extractor().extract("Gold ₹9,123.45").unwrap(), 9123.45);
        assert_eq!(extractor().extract("1,234,567").unwrap(), 1_234_567.0);
    }

    #[test]
    fn test_extract_takes_first_run() {
        assert_eq!(extractor().extract("12 gm at 34.5").unwrap(), 12.0);
    }

    #[test]
    fn test_extract_integer_run() {
        assert_eq!(extractor().extract("price is 200 today").unwrap(), 200.0);
    }

    #[test]
    fn test_extract_no_digits_fails() {
        let err = extractor().extract("Live Silver Price").unwrap_err();
        assert!(matches!(err, ParseError::NoNumber(_)));
    }
}
