use anyhow::Context;
use chrono::Utc;
use tracing::{info, Level};

use yelp_scout::client::{ClientTrait, YelpClient};
use yelp_scout::search::{Attribute, Distance, PricingLevel, SearchCriteria, SortingMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🔎 Yelp Scout - business search");
    info!("================================");
    info!("");

    let api_key = std::env::var("YELP_API_KEY").context("YELP_API_KEY is not set")?;
    let client = YelpClient::new(api_key)?;

    let criteria = SearchCriteria::by_location("San Antonio")
        .with_term("restaurants")
        .within_a_radius_of(Distance::in_miles(2.0))?
        .in_categories("mexican")
        .with_pricing(&[PricingLevel::Moderate])
        .with_attributes(&[Attribute::HotAndNew, Attribute::Deals])
        .open_at(Utc::now().timestamp())?
        .limit(5)?
        .sort_by(SortingMode::ReviewCount);

    info!("Searching {} for mexican restaurants...", client.provider_name());
    let response = client.search(&criteria).await?;

    info!("\n✅ Found {} matching businesses\n", response.total);

    for (i, business) in response.businesses.iter().enumerate() {
        let name = business["name"].as_str().unwrap_or("(unnamed)");
        let rating = business["rating"].as_f64().unwrap_or(0.0);
        println!("{}. {} ({} stars)", i + 1, name, rating);
        if let Some(address) = business["location"]["display_address"][0].as_str() {
            println!("   {}", address);
        }
        if let Some(id) = business["id"].as_str() {
            println!("   ID: {}", id);
        }
        println!();
    }

    let pagination = criteria.pagination(response.total);
    info!(
        "Showing page {} of {}",
        pagination.current_page(),
        pagination.total_pages()
    );

    // Save raw payloads for later inspection
    let json = serde_json::to_string_pretty(&response.businesses)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved raw results to search_results.json");

    Ok(())
}
