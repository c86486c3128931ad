use anyhow::{Context, Result};
use std::time::Duration;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Default base URL of the ViaCEP postal lookup.
pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br";

/// Default base URL of the WeatherAPI.com weather lookup.
pub const DEFAULT_WEATHERAPI_BASE_URL: &str = "http://api.weatherapi.com";

/// Default per-request timeout for outbound calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Placeholder credential used when `WEATHER_API_KEY` is unset. The process
/// still starts; the weather service rejects the key and the request fails
/// with the 500 terminal.
const PLACEHOLDER_API_KEY: &str = "sua_chave_api";

/// Runtime configuration, read from the environment once at startup and
/// passed into the pipeline explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub weather_api_key: String,
    pub viacep_base_url: String,
    pub weatherapi_base_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            weather_api_key: PLACEHOLDER_API_KEY.to_string(),
            viacep_base_url: DEFAULT_VIACEP_BASE_URL.to_string(),
            weatherapi_base_url: DEFAULT_WEATHERAPI_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognised variables: `PORT`, `WEATHER_API_KEY`, `VIACEP_BASE_URL`,
    /// `WEATHERAPI_BASE_URL`, `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?;
        }

        if let Ok(key) = std::env::var("WEATHER_API_KEY") {
            if !key.trim().is_empty() {
                config.weather_api_key = key;
            }
        }

        if let Ok(url) = std::env::var("VIACEP_BASE_URL") {
            config.viacep_base_url = url;
        }
        if let Ok(url) = std::env::var("WEATHERAPI_BASE_URL") {
            config.weatherapi_base_url = url;
        }

        if let Ok(secs) = std::env::var("REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a valid number: {secs}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Whether a real credential was supplied rather than the placeholder.
    pub fn has_weather_api_key(&self) -> bool {
        self.weather_api_key != PLACEHOLDER_API_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_real_services() {
        let cfg = Config::default();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.viacep_base_url, DEFAULT_VIACEP_BASE_URL);
        assert_eq!(cfg.weatherapi_base_url, DEFAULT_WEATHERAPI_BASE_URL);
        assert_eq!(cfg.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(!cfg.has_weather_api_key());
    }

    #[test]
    fn explicit_key_counts_as_configured() {
        let cfg = Config {
            weather_api_key: "real-key".to_string(),
            ..Config::default()
        };
        assert!(cfg.has_weather_api_key());
    }
}
