pub mod nominatim;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub display_name: Option<String>,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First match for a free-text place query, or `None` if nothing matched.
    async fn lookup(&self, query: &str) -> anyhow::Result<Option<GeoPoint>>;
}

/// Lookups are restricted to Kenya by suffixing the country name.
pub fn kenya_query(text: &str) -> String {
    format!("{}, Kenya", text.trim())
}
