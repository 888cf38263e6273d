use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::client::traits::ClientTrait;
use crate::models::SearchResponse;
use crate::search::SearchCriteria;

const BASE_URL: &str = "https://api.yelp.com/v3/";

/// Thin transport over the Yelp Fusion REST endpoints.
///
/// Holds a pooled HTTP client plus the bearer API key; all parameter
/// validation happens in [`SearchCriteria`] before a request is built.
pub struct YelpClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl YelpClient {
    /// Create a client authenticated with the given Fusion API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(BASE_URL).context("Failed to parse the API base URL")?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Fetch the full payload of a single business by its id
    pub async fn business(&self, business_id: &str) -> Result<serde_json::Value> {
        let url = self
            .base_url
            .join(&format!("businesses/{}", business_id))
            .context("Failed to build the business URL")?;

        self.get_json(url).await
    }

    /// Fetch the reviews payload of a single business by its id
    pub async fn reviews(&self, business_id: &str) -> Result<serde_json::Value> {
        let url = self
            .base_url
            .join(&format!("businesses/{}/reviews", business_id))
            .context("Failed to build the reviews URL")?;

        self.get_json(url).await
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value> {
        debug!("Fetching URL: {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to reach the API")?;

        if !response.status().is_success() {
            warn!("API returned status: {}", response.status());
            anyhow::bail!("Request failed: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to decode the response body")
    }
}

#[async_trait]
impl ClientTrait for YelpClient {
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse> {
        let mut url = self
            .base_url
            .join("businesses/search")
            .context("Failed to build the search URL")?;
        criteria.add_query_parameters_to(&mut url);

        debug!("Fetching URL: {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("Failed to reach the search endpoint")?;

        if !response.status().is_success() {
            warn!("Search endpoint returned status: {}", response.status());
            anyhow::bail!("Search request failed: {}", response.status());
        }

        let result: SearchResponse = response
            .json()
            .await
            .context("Failed to decode the search response")?;

        info!(
            "Search returned {} of {} matching businesses",
            result.businesses.len(),
            result.total
        );

        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "Yelp Fusion"
    }
}
