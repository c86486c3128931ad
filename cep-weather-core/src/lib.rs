//! Core library for the CEP weather service.
//!
//! This crate defines:
//! - Configuration handling (port, credentials, upstream endpoints)
//! - Abstractions over the two upstream lookup services
//! - Shared domain models (postal codes, localities, temperature triples)
//! - The orchestration pipeline chaining both lookups
//!
//! It is used by `cep-weather-server`, but can also be reused by other
//! binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod resolver;

pub use config::Config;
pub use error::{LocalityError, PipelineError, WeatherError};
pub use model::{Locality, PostalCode, TemperatureTriple, WeatherReading};
pub use pipeline::WeatherPipeline;
pub use resolver::{LocalityResolver, WeatherResolver};
