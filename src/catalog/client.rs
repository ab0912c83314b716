/**
 * Catalog Client
 *
 * Thin client for the external film catalog API. Requests carry the API
 * key in the `X-API-KEY` header.
 *
 * Failure handling is deliberately lossy: a non-success status or a
 * transport error is logged and surfaces to callers as an empty result.
 * Callers treat empty/None as "unavailable", not "not found".
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::config::CatalogConfig;

const SEARCH_PATH: &str = "/api/v2.1/films/search-by-keyword";
const DETAILS_PATH: &str = "/api/v2.2/films";

/// The subset of a catalog search hit needed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmSummary {
    pub film_id: i64,
    pub rating: Option<Value>,
    pub year: Option<Value>,
    pub countries: Option<Value>,
    pub poster_url: Option<Value>,
}

/// Search hit as returned by the catalog. Field types beyond the id are
/// left as raw JSON; the catalog mixes strings and numbers across
/// entries.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilm {
    film_id: i64,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    year: Option<Value>,
    #[serde(default)]
    countries: Option<Value>,
    #[serde(default)]
    poster_url: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    films: Vec<RawFilm>,
}

/// Client for the external film catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Search the catalog by keyword, projecting each hit down to a
    /// [`FilmSummary`]. Returns an empty vec on no results or on any
    /// upstream failure.
    pub async fn search(&self, keyword: &str) -> Vec<FilmSummary> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        let Some(body) = self.fetch(&url, &[("keyword", keyword)]).await else {
            return Vec::new();
        };

        let parsed: SearchResponse = match serde_json::from_value(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!("Unexpected catalog search response shape: {}", e);
                return Vec::new();
            }
        };

        parsed
            .films
            .into_iter()
            .map(|film| FilmSummary {
                film_id: film.film_id,
                rating: film.rating,
                year: film.year,
                countries: film.countries,
                poster_url: film.poster_url,
            })
            .collect()
    }

    /// Fetch the raw detail record for a film. Passed through untouched;
    /// None on any upstream failure.
    pub async fn details(&self, film_id: i64) -> Option<Value> {
        let url = format!("{}{}/{}", self.base_url, DETAILS_PATH, film_id);
        self.fetch(&url, &[]).await
    }

    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Option<Value> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Catalog request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Catalog returned {}: {}", status, message);
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("Catalog returned unparseable body: {}", e);
                None
            }
        }
    }
}
