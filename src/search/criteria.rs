use std::collections::HashMap;

use url::Url;

use crate::models::Coordinates;
use crate::search::distance::{Distance, UnitOfLength};
use crate::search::error::CriteriaError;
use crate::search::options::{Attribute, Locale, PricingLevel, SortingMode};
use crate::search::pagination::Pagination;
use crate::search::query::QueryString;

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 50;

/// Search parameters for the business search endpoint.
///
/// A criteria starts from either a free-text location or a pair of
/// coordinates; everything else is added through chained calls. Each call
/// consumes the criteria and hands it back, so validation failures surface at
/// the offending call rather than at serialization time:
///
/// ```
/// use yelp_scout::search::{Distance, SearchCriteria, SortingMode};
///
/// # fn main() -> Result<(), yelp_scout::search::CriteriaError> {
/// let criteria = SearchCriteria::by_location("San Antonio")
///     .with_term("bbq")
///     .within_a_radius_of(Distance::in_miles(2.0))?
///     .sort_by(SortingMode::Rating)
///     .limit(5)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    parameters: HashMap<&'static str, String>,
}

impl SearchCriteria {
    pub fn by_location(location: impl Into<String>) -> Self {
        let mut parameters = HashMap::new();
        parameters.insert("location", location.into());

        Self { parameters }
    }

    pub fn by_coordinates(coordinates: Coordinates) -> Self {
        let mut parameters = HashMap::new();
        parameters.insert("latitude", coordinates.latitude.to_string());
        parameters.insert("longitude", coordinates.longitude.to_string());

        Self { parameters }
    }

    /// The endpoint caps every page at 50 results.
    pub fn limit(mut self, limit: u32) -> Result<Self, CriteriaError> {
        if limit > MAX_PAGE_SIZE {
            return Err(CriteriaError::TooManyResults { requested: limit });
        }

        self.parameters.insert("limit", limit.to_string());
        Ok(self)
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.parameters.insert("offset", offset.to_string());
        self
    }

    pub fn sort_by(mut self, mode: SortingMode) -> Self {
        self.parameters.insert("sort_by", mode.value().to_string());
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.parameters.insert("term", term.into());
        self
    }

    /// The radius goes over the wire in whole meters, truncated.
    pub fn within_a_radius_of(mut self, distance: Distance) -> Result<Self, CriteriaError> {
        if distance.bigger_than(Distance::largest()) {
            return Err(CriteriaError::AreaTooLarge {
                requested: distance,
            });
        }

        let meters = distance.convert_to(UnitOfLength::Meters).value as i64;
        self.parameters.insert("radius", meters.to_string());
        Ok(self)
    }

    pub fn open_now(mut self) -> Result<Self, CriteriaError> {
        if self.parameters.contains_key("open_at") {
            return Err(CriteriaError::IncompatibleCriteria {
                requested: "open_now",
                existing: "open_at",
            });
        }

        self.parameters.insert("open_now", true.to_string());
        Ok(self)
    }

    /// `timestamp` is in unix seconds.
    pub fn open_at(mut self, timestamp: i64) -> Result<Self, CriteriaError> {
        if self.parameters.contains_key("open_now") {
            return Err(CriteriaError::IncompatibleCriteria {
                requested: "open_at",
                existing: "open_now",
            });
        }

        self.parameters.insert("open_at", timestamp.to_string());
        Ok(self)
    }

    /// `categories` is a comma-separated list of category aliases, passed
    /// through verbatim.
    pub fn in_categories(mut self, categories: impl Into<String>) -> Self {
        self.parameters.insert("categories", categories.into());
        self
    }

    pub fn with_pricing(mut self, levels: &[PricingLevel]) -> Self {
        if levels.is_empty() {
            return self;
        }

        let price = levels
            .iter()
            .map(|level| level.value().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.parameters.insert("price", price);
        self
    }

    /// Attributes are serialized in the order they are given.
    pub fn with_attributes(mut self, attributes: &[Attribute]) -> Self {
        if attributes.is_empty() {
            return self;
        }

        let filters = attributes
            .iter()
            .map(|attribute| attribute.value())
            .collect::<Vec<_>>()
            .join(",");
        self.parameters.insert("attributes", filters);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.parameters.insert("locale", locale.to_string());
        self
    }

    /// The limit in effect, whether it was set explicitly or not.
    pub fn current_limit(&self) -> u32 {
        self.parameters
            .get("limit")
            .and_then(|limit| limit.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// The offset in effect, whether it was set explicitly or not.
    pub fn current_offset(&self) -> u32 {
        self.parameters
            .get("offset")
            .and_then(|offset| offset.parse().ok())
            .unwrap_or(0)
    }

    pub fn pagination(&self, total: u32) -> Pagination {
        Pagination::from_search(self, total)
    }

    /// Render every parameter that has been set. Key order is unspecified.
    pub fn to_query_string(&self) -> QueryString {
        QueryString::build(&self.parameters)
    }

    /// Render for a specific 1-indexed page, leaving this criteria untouched.
    pub fn query_string_for_page(&self, page: u32) -> QueryString {
        self.clone()
            .offset(page.saturating_sub(1) * self.current_limit())
            .to_query_string()
    }

    /// Append every parameter to the query of an already-built URL.
    pub fn add_query_parameters_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &self.parameters {
            pairs.append_pair(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pairs(query: &QueryString) -> HashMap<String, String> {
        url::form_urlencoded::parse(query.as_str().trim_start_matches('?').as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn it_does_not_allow_a_radius_bigger_than_40000_meters() {
        let result = SearchCriteria::by_location("San Antonio")
            .within_a_radius_of(Distance::in_meters(40_001.0));

        assert!(matches!(result, Err(CriteriaError::AreaTooLarge { .. })));
    }

    #[test]
    fn it_accepts_a_radius_of_exactly_40000_meters() {
        let criteria = SearchCriteria::by_location("San Antonio")
            .within_a_radius_of(Distance::in_meters(40_000.0))
            .unwrap();

        assert_eq!(pairs(&criteria.to_query_string())["radius"], "40000");
    }

    #[test]
    fn it_truncates_the_radius_to_whole_meters() {
        let criteria = SearchCriteria::by_location("San Antonio")
            .within_a_radius_of(Distance::in_miles(2.0))
            .unwrap();

        // 2 miles = 3218.688 meters
        assert_eq!(pairs(&criteria.to_query_string())["radius"], "3218");
    }

    #[test]
    fn it_does_not_allow_more_than_50_results() {
        let result =
            SearchCriteria::by_coordinates(Coordinates::new(29.426786, -98.489576)).limit(51);

        assert!(matches!(
            result,
            Err(CriteriaError::TooManyResults { requested: 51 })
        ));
    }

    #[test]
    fn it_accepts_a_limit_of_50_results() {
        let criteria = SearchCriteria::by_location("San Antonio").limit(50).unwrap();

        assert_eq!(criteria.current_limit(), 50);
    }

    #[test]
    fn it_does_not_allow_searches_with_open_at_and_open_now() {
        let result = SearchCriteria::by_coordinates(Coordinates::new(29.426786, -98.489576))
            .open_now()
            .unwrap()
            .open_at(Utc::now().timestamp());

        assert_eq!(
            result.unwrap_err(),
            CriteriaError::IncompatibleCriteria {
                requested: "open_at",
                existing: "open_now",
            }
        );
    }

    #[test]
    fn it_does_not_allow_searches_with_open_now_and_open_at() {
        let result = SearchCriteria::by_coordinates(Coordinates::new(29.426786, -98.489576))
            .open_at(Utc::now().timestamp())
            .unwrap()
            .open_now();

        assert_eq!(
            result.unwrap_err(),
            CriteriaError::IncompatibleCriteria {
                requested: "open_now",
                existing: "open_at",
            }
        );
    }

    #[test]
    fn it_adds_several_attributes() {
        let criteria = SearchCriteria::by_location("San Antonio").with_attributes(&[
            Attribute::Cashback,
            Attribute::Deals,
            Attribute::GenderNeutralRestrooms,
        ]);

        assert_eq!(
            pairs(&criteria.to_query_string())["attributes"],
            "cashback,deals,gender_neutral_restrooms"
        );
    }

    #[test]
    fn it_serializes_several_pricing_levels() {
        let criteria = SearchCriteria::by_location("San Antonio")
            .with_pricing(&[PricingLevel::Inexpensive, PricingLevel::Moderate]);

        assert_eq!(pairs(&criteria.to_query_string())["price"], "1,2");
    }

    #[test]
    fn it_can_be_represented_as_a_query_string() {
        let criteria = SearchCriteria::by_location("San Antonio")
            .with_term("restaurants")
            .within_a_radius_of(Distance::in_miles(2.0))
            .unwrap()
            .in_categories("mexican")
            .with_pricing(&[PricingLevel::Moderate])
            .with_attributes(&[Attribute::HotAndNew, Attribute::Deals])
            .open_now()
            .unwrap()
            .limit(5)
            .unwrap()
            .offset(5)
            .sort_by(SortingMode::ReviewCount);

        let query = criteria.query_string_for_page(2);
        let raw = query.as_str();

        assert!(raw.starts_with('?'));
        assert!(raw.contains("location=San+Antonio"));
        assert!(raw.contains("attributes=hot_and_new%2Cdeals"));

        let decoded = pairs(&query);
        assert_eq!(decoded.len(), 10);
        assert_eq!(decoded["open_now"], "true");
        assert_eq!(decoded["offset"], "5");
        assert_eq!(decoded["price"], "2");
        assert_eq!(decoded["limit"], "5");
        assert_eq!(decoded["location"], "San Antonio");
        assert_eq!(decoded["term"], "restaurants");
        assert_eq!(decoded["attributes"], "hot_and_new,deals");
        assert_eq!(decoded["categories"], "mexican");
        assert_eq!(decoded["sort_by"], "review_count");
        assert_eq!(decoded["radius"], "3218");
    }

    #[test]
    fn it_has_access_to_the_current_limit_and_offset_values() {
        let criteria = SearchCriteria::by_location("San Antonio")
            .limit(5)
            .unwrap()
            .offset(15);

        assert_eq!(criteria.current_limit(), 5);
        assert_eq!(criteria.current_offset(), 15);
    }

    #[test]
    fn it_has_default_values_for_limit_and_offset() {
        let criteria = SearchCriteria::by_location("San Antonio");

        assert_eq!(criteria.current_limit(), 20);
        assert_eq!(criteria.current_offset(), 0);
    }

    #[test]
    fn it_searches_by_coordinates() {
        let criteria = SearchCriteria::by_coordinates(Coordinates::new(29.426786, -98.489576));

        let decoded = pairs(&criteria.to_query_string());
        assert_eq!(decoded["latitude"], "29.426786");
        assert_eq!(decoded["longitude"], "-98.489576");
        assert!(!decoded.contains_key("location"));
    }

    #[test]
    fn it_uses_the_underscore_locale_wire_format() {
        let criteria =
            SearchCriteria::by_location("San Antonio").with_locale(Locale::new("es", "MX"));

        assert_eq!(pairs(&criteria.to_query_string())["locale"], "es_MX");
    }

    #[test]
    fn it_leaves_the_original_criteria_untouched_when_rendering_a_page() {
        let criteria = SearchCriteria::by_location("San Antonio").limit(2).unwrap();

        let page_three = criteria.query_string_for_page(3);

        assert_eq!(pairs(&page_three)["offset"], "4");
        assert_eq!(criteria.current_offset(), 0);
    }

    #[test]
    fn it_populates_a_url_with_its_parameters() {
        let criteria = SearchCriteria::by_location("San Antonio").with_term("tacos");

        let mut url = Url::parse("https://api.yelp.com/v3/businesses/search").unwrap();
        criteria.add_query_parameters_to(&mut url);

        let decoded: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(decoded["location"], "San Antonio");
        assert_eq!(decoded["term"], "tacos");
    }
}
