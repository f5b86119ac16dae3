use crate::data::extract::{NumericExtractor, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Silver price not found")]
    NotFound,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub struct PriceResolver {
    extractor: NumericExtractor,
}

impl PriceResolver {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            extractor: NumericExtractor::new()?,
        })
    }

    /// Pick the silver price out of one poll's rendered price fragments.
    ///
    /// Fragments without a digit are skipped; the rest must extract cleanly.
    /// The target page renders the silver span after the gold span, so the
    /// last surviving fragment is the one we want. A page layout reorder
    /// would silently select the wrong metal.
    pub fn resolve(&self, fragments: &[String]) -> Result<f64, ResolveError> {
        let mut price = None;

        for fragment in fragments {
            if !fragment.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            price = Some(self.extractor.extract(fragment)?);
        }

        price.ok_or(ResolveError::NotFound)
    }
}
