use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::LocalityError,
    model::{Locality, PostalCode},
};

use super::{LocalityResolver, truncate_body};

/// ViaCEP-backed postal lookup (`GET {base}/ws/{digits}/json/`).
#[derive(Debug, Clone)]
pub struct ViaCepResolver {
    http: Client,
    base_url: String,
}

impl ViaCepResolver {
    /// Build a resolver with a bounded per-request timeout.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.viacep_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LocalityResolver for ViaCepResolver {
    async fn resolve(&self, raw_postal_code: &str) -> Result<Locality, LocalityError> {
        // Re-derive the clean digit form from the raw input.
        let digits = PostalCode::strip(raw_postal_code);
        let url = format!("{}/ws/{}/json/", self.base_url, digits);

        debug!(%url, "requesting postal lookup");
        let res = self.http.get(&url).send().await?;
        let body = res.text().await?;

        let parsed: ViaCepDto = serde_json::from_str(&body).map_err(|e| {
            debug!(body = %truncate_body(&body), "postal lookup body did not decode");
            LocalityError::Decode(e)
        })?;

        if parsed.erro || parsed.localidade.is_empty() {
            return Err(LocalityError::NotFound);
        }

        Ok(parsed.into_locality())
    }
}

#[derive(Debug, Deserialize)]
struct ViaCepDto {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    /// ViaCEP signals an unknown code with `"erro": true` on an otherwise
    /// well-formed body.
    #[serde(default)]
    erro: bool,
}

impl ViaCepDto {
    fn into_locality(self) -> Locality {
        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        Locality {
            name: self.localidade,
            region: non_empty(self.uf),
            street: non_empty(self.logradouro),
            neighbourhood: non_empty(self.bairro),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_maps_empty_metadata_to_none() {
        let dto: ViaCepDto =
            serde_json::from_str(r#"{"localidade": "São Paulo", "uf": "SP"}"#)
                .expect("dto must decode");
        let locality = dto.into_locality();
        assert_eq!(locality.name, "São Paulo");
        assert_eq!(locality.region.as_deref(), Some("SP"));
        assert!(locality.street.is_none());
        assert!(locality.neighbourhood.is_none());
    }

    #[test]
    fn error_flag_defaults_to_false() {
        let dto: ViaCepDto = serde_json::from_str(r#"{"localidade": "Recife"}"#)
            .expect("dto must decode");
        assert!(!dto.erro);
    }
}
