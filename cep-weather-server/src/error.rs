//! Mapping from pipeline terminals to HTTP responses.
//!
//! The core stays free of transport concerns; each [`PipelineError`] variant
//! is translated into its fixed status/message pair here. Internal causes are
//! logged and never serialized into the response body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cep_weather_core::PipelineError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Error body returned by every failure terminal: a single human-readable
/// message, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

/// Actix-facing wrapper around a pipeline failure.
#[derive(Debug)]
pub struct ApiError(PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            PipelineError::InvalidPostalCode => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineError::LocalityLookup(_) => StatusCode::NOT_FOUND,
            PipelineError::WeatherLookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        use std::error::Error as _;

        match &self.0 {
            PipelineError::InvalidPostalCode => warn!("rejected malformed postal code"),
            err @ PipelineError::LocalityLookup(_) => {
                warn!(cause = ?err.source(), "postal code could not be resolved");
            }
            err @ PipelineError::WeatherLookup(_) => {
                error!(cause = ?err.source(), "weather lookup failed");
            }
        }

        HttpResponse::build(self.status_code()).json(ErrorEnvelope {
            message: self.0.to_string(),
        })
    }
}
