use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{config::Config, error::WeatherError, model::WeatherReading};

use super::{WeatherResolver, truncate_body};

/// WeatherAPI.com-backed current-weather lookup
/// (`GET {base}/v1/current.json?key=…&q=…&aqi=no`).
#[derive(Debug, Clone)]
pub struct WeatherApiResolver {
    api_key: String,
    http: Client,
    base_url: String,
}

impl WeatherApiResolver {
    /// Build a resolver with a bounded per-request timeout.
    ///
    /// The credential is taken as configured; an invalid or placeholder key
    /// is not rejected here, the upstream service will answer with a
    /// non-success status instead.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            api_key: config.weather_api_key.clone(),
            http,
            base_url: config.weatherapi_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherResolver for WeatherApiResolver {
    async fn resolve(&self, locality: &str) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/v1/current.json", self.base_url);

        debug!(%locality, "requesting current weather");
        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", locality),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "weather service returned non-success");
            return Err(WeatherError::UpstreamStatus { status });
        }

        let parsed: WaCurrentDto = serde_json::from_str(&body).map_err(|e| {
            debug!(body = %truncate_body(&body), "weather body did not decode");
            WeatherError::Decode(e)
        })?;

        Ok(WeatherReading {
            location_name: parsed.location.name,
            temperature_c: parsed.current.temp_c,
            observed_at: Utc::now(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct WaCurrentDto {
    location: WaLocation,
    current: WaCurrent,
}
