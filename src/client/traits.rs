use crate::models::SearchResponse;
use crate::search::SearchCriteria;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all business-search providers
/// This allows swapping the transport out in tests or adding providers later
#[async_trait]
pub trait ClientTrait: Send + Sync {
    /// Run a search with the given criteria
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse>;

    /// Get the name of the provider
    fn provider_name(&self) -> &'static str;
}
