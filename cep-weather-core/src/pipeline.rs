use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    config::Config,
    error::PipelineError,
    model::{PostalCode, TemperatureTriple},
    resolver::{LocalityResolver, ViaCepResolver, WeatherApiResolver, WeatherResolver},
};

/// The end-to-end request pipeline: validate, resolve locality, resolve
/// weather, normalize.
///
/// Resolvers are injected as trait objects so the pipeline can be exercised
/// without network access. The two lookups are strictly sequential: the
/// weather call needs the locality name produced by the postal call.
#[derive(Debug, Clone)]
pub struct WeatherPipeline {
    locality: Arc<dyn LocalityResolver>,
    weather: Arc<dyn WeatherResolver>,
}

impl WeatherPipeline {
    pub fn new(locality: Arc<dyn LocalityResolver>, weather: Arc<dyn WeatherResolver>) -> Self {
        Self { locality, weather }
    }

    /// Wire up the real ViaCEP and WeatherAPI resolvers from configuration.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            Arc::new(ViaCepResolver::new(config)?),
            Arc::new(WeatherApiResolver::new(config)?),
        ))
    }

    /// Run one request through the pipeline.
    ///
    /// Exactly one success terminal and three failure terminals; no step is
    /// retried. The raw input is handed to the locality resolver unchanged,
    /// validation only gates entry.
    pub async fn handle(&self, raw_postal_code: &str) -> Result<TemperatureTriple, PipelineError> {
        let postal_code =
            PostalCode::parse(raw_postal_code).ok_or(PipelineError::InvalidPostalCode)?;
        debug!(%postal_code, "postal code accepted");

        let locality = self
            .locality
            .resolve(raw_postal_code)
            .await
            .map_err(PipelineError::LocalityLookup)?;
        debug!(
            locality = %locality.name,
            region = ?locality.region,
            street = ?locality.street,
            neighbourhood = ?locality.neighbourhood,
            "locality resolved"
        );

        let reading = self
            .weather
            .resolve(&locality.name)
            .await
            .map_err(PipelineError::WeatherLookup)?;

        info!(
            %postal_code,
            locality = %locality.name,
            temperature_c = reading.temperature_c,
            "request served"
        );
        Ok(TemperatureTriple::from_celsius(reading.temperature_c))
    }
}
