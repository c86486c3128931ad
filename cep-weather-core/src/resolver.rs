use crate::{
    error::{LocalityError, WeatherError},
    model::{Locality, WeatherReading},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod viacep;
pub mod weatherapi;

pub use viacep::ViaCepResolver;
pub use weatherapi::WeatherApiResolver;

/// Maps a raw postal code to a locality.
///
/// Implementations receive the raw user input and re-derive the clean digit
/// form themselves rather than trusting a caller-supplied value.
#[async_trait]
pub trait LocalityResolver: Send + Sync + Debug {
    async fn resolve(&self, raw_postal_code: &str) -> Result<Locality, LocalityError>;
}

/// Maps a locality name to its current weather.
#[async_trait]
pub trait WeatherResolver: Send + Sync + Debug {
    async fn resolve(&self, locality: &str) -> Result<WeatherReading, WeatherError>;
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i <= MAX)
            .last()
            .map_or(0, |(i, _)| i);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_pass_through_untruncated() {
        assert_eq!(truncate_body("{}"), "{}");
    }

    #[test]
    fn long_bodies_are_truncated_for_logging() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert!(truncated.len() < body.len());
        assert!(truncated.ends_with("..."));
    }
}
