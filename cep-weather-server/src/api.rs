//! Route handlers for the weather and health endpoints.

use actix_web::{HttpResponse, get, web};
use cep_weather_core::WeatherPipeline;

use crate::error::ApiError;

/// `GET /weather/{postal_code}` — run one request through the pipeline.
#[get("/weather/{postal_code}")]
pub async fn weather(
    path: web::Path<String>,
    pipeline: web::Data<WeatherPipeline>,
) -> Result<HttpResponse, ApiError> {
    let triple = pipeline.handle(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(triple))
}

/// `GET /health` — liveness probe only, no dependency checks.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorEnvelope;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use cep_weather_core::{
        Locality, LocalityError, LocalityResolver, TemperatureTriple, WeatherError,
        WeatherReading, WeatherResolver,
    };
    use chrono::Utc;
    use std::sync::Arc;

    #[derive(Debug)]
    struct StubLocalityResolver(Option<Locality>);

    #[async_trait]
    impl LocalityResolver for StubLocalityResolver {
        async fn resolve(&self, _raw_postal_code: &str) -> Result<Locality, LocalityError> {
            self.0.clone().ok_or(LocalityError::NotFound)
        }
    }

    #[derive(Debug)]
    struct StubWeatherResolver(Option<f64>);

    #[async_trait]
    impl WeatherResolver for StubWeatherResolver {
        async fn resolve(&self, locality: &str) -> Result<WeatherReading, WeatherError> {
            match self.0 {
                Some(temperature_c) => Ok(WeatherReading {
                    location_name: locality.to_string(),
                    temperature_c,
                    observed_at: Utc::now(),
                }),
                None => Err(WeatherError::Decode(
                    serde_json::from_str::<serde_json::Value>("not json")
                        .expect_err("must not decode"),
                )),
            }
        }
    }

    fn sao_paulo() -> Option<Locality> {
        Some(Locality {
            name: "São Paulo".to_string(),
            region: Some("SP".to_string()),
            street: None,
            neighbourhood: None,
        })
    }

    async fn request(
        locality: Option<Locality>,
        temperature: Option<f64>,
        path: &str,
    ) -> actix_web::dev::ServiceResponse {
        let pipeline = WeatherPipeline::new(
            Arc::new(StubLocalityResolver(locality)),
            Arc::new(StubWeatherResolver(temperature)),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pipeline))
                .service(weather)
                .service(health),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await
    }

    #[actix_web::test]
    async fn valid_postal_code_returns_the_triple() {
        let res = request(sao_paulo(), Some(25.0), "/weather/01001-000").await;
        assert_eq!(res.status().as_u16(), 200);

        let body: TemperatureTriple = test::read_body_json(res).await;
        assert_eq!(body, TemperatureTriple::from_celsius(25.0));
    }

    #[actix_web::test]
    async fn malformed_postal_code_is_unprocessable() {
        let res = request(sao_paulo(), Some(25.0), "/weather/1234").await;
        assert_eq!(res.status().as_u16(), 422);

        let body: ErrorEnvelope = test::read_body_json(res).await;
        assert_eq!(body.message, "invalid zipcode");
    }

    #[actix_web::test]
    async fn unknown_postal_code_is_not_found() {
        let res = request(None, Some(25.0), "/weather/99999-999").await;
        assert_eq!(res.status().as_u16(), 404);

        let body: ErrorEnvelope = test::read_body_json(res).await;
        assert_eq!(body.message, "can not find zipcode");
    }

    #[actix_web::test]
    async fn weather_failure_is_an_internal_error() {
        let res = request(sao_paulo(), None, "/weather/01001-000").await;
        assert_eq!(res.status().as_u16(), 500);

        let body: ErrorEnvelope = test::read_body_json(res).await;
        assert_eq!(body.message, "error fetching temperature data");
    }

    #[actix_web::test]
    async fn health_probe_is_always_ok() {
        let res = request(None, None, "/health").await;
        assert_eq!(res.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({"status": "healthy"}));
    }
}
