use thiserror::Error;

/// Failures raised by the postal-code-to-locality lookup.
#[derive(Debug, Error)]
pub enum LocalityError {
    /// The lookup service decoded cleanly but flagged the code as unknown,
    /// or returned no locality name.
    #[error("postal code is not known to the lookup service")]
    NotFound,

    #[error("postal lookup transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("postal lookup returned an undecodable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures raised by the locality-to-weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Upstream answered with a non-success status. The status is kept for
    /// logging only and never reaches the caller.
    #[error("weather service responded with status {status}")]
    UpstreamStatus { status: reqwest::StatusCode },

    #[error("weather lookup transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service returned an undecodable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Terminal outcomes of the request pipeline.
///
/// The `Display` strings are the client-facing messages and are part of the
/// service contract; internal causes stay in the error source chain.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid zipcode")]
    InvalidPostalCode,

    #[error("can not find zipcode")]
    LocalityLookup(#[source] LocalityError),

    #[error("error fetching temperature data")]
    WeatherLookup(#[source] WeatherError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_facing_messages_are_stable() {
        assert_eq!(PipelineError::InvalidPostalCode.to_string(), "invalid zipcode");
        assert_eq!(
            PipelineError::LocalityLookup(LocalityError::NotFound).to_string(),
            "can not find zipcode"
        );
        assert_eq!(
            PipelineError::WeatherLookup(WeatherError::UpstreamStatus {
                status: reqwest::StatusCode::UNAUTHORIZED,
            })
            .to_string(),
            "error fetching temperature data"
        );
    }

    #[test]
    fn upstream_status_stays_in_the_source_chain() {
        use std::error::Error;

        let err = PipelineError::WeatherLookup(WeatherError::UpstreamStatus {
            status: reqwest::StatusCode::FORBIDDEN,
        });
        let source = err.source().expect("source must be preserved");
        assert!(source.to_string().contains("403"));
        // The client-facing message must not leak it.
        assert!(!err.to_string().contains("403"));
    }
}
