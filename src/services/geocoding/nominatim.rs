use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::{GeoPoint, Geocoder};

pub struct NominatimGeocoder {
    url: String,
    user_agent: String,
    language: String,
    client: reqwest::Client,
}

impl NominatimGeocoder {
    pub fn new(url: String, user_agent: String, language: String) -> Self {
        Self {
            url,
            user_agent,
            language,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

fn first_point(candidates: Vec<Candidate>) -> anyhow::Result<Option<GeoPoint>> {
    let Some(first) = candidates.into_iter().next() else {
        return Ok(None);
    };

    let lat = first
        .lat
        .parse::<f64>()
        .with_context(|| format!("invalid latitude {:?}", first.lat))?;
    let lng = first
        .lon
        .parse::<f64>()
        .with_context(|| format!("invalid longitude {:?}", first.lon))?;

    Ok(Some(GeoPoint {
        lat,
        lng,
        display_name: first.display_name,
    }))
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn lookup(&self, query: &str) -> anyhow::Result<Option<GeoPoint>> {
        let candidates: Vec<Candidate> = self
            .client
            .get(&self.url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::ACCEPT_LANGUAGE, &self.language)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .context("failed to call geocoding service")?
            .error_for_status()
            .context("geocoding service returned error")?
            .json()
            .await
            .context("failed to parse geocoding response")?;

        first_point(candidates)
    }
}
