//! Binary crate for the CEP weather HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and environment configuration
//! - Logging initialization
//! - Routing and error-to-status mapping

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use cep_weather_core::{Config, WeatherPipeline};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod error;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("cep_weather_core=debug,cep_weather_server=debug,info")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_tracing(args.verbose);

    let mut config = Config::from_env().context("invalid environment configuration")?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if !config.has_weather_api_key() {
        warn!("WEATHER_API_KEY is not set; using a placeholder key, weather lookups will fail");
    }

    let pipeline =
        WeatherPipeline::from_config(&config).context("failed to construct outbound HTTP clients")?;

    info!(port = config.port, "starting CEP weather server");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pipeline.clone()))
            .service(api::weather)
            .service(api::health)
    })
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("failed to bind port {}", config.port))?
    .run()
    .await?;

    Ok(())
}
