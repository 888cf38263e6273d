use serde::{Deserialize, Serialize};

/// A geographic point, used to search around a position instead of a
/// free-text location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The area the API actually searched, reported back with every result page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinates,
}

/// Envelope around one page of search results
///
/// Business payloads are kept as raw JSON; mapping them into richer types is
/// left to the consumer. `total` feeds the pagination helper.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total: u32,
    #[serde(default)]
    pub businesses: Vec<serde_json::Value>,
    #[serde(default)]
    pub region: Option<Region>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_decodes_a_search_envelope() {
        let payload = json!({
            "total": 144,
            "businesses": [
                { "id": "bella-on-the-river-san-antonio", "name": "Bella on the River", "rating": 4.5 },
                { "id": "la-panaderia-san-antonio", "name": "La Panadería", "rating": 4.0 }
            ],
            "region": { "center": { "latitude": 29.426786, "longitude": -98.489576 } }
        });

        let response: SearchResponse = serde_json::from_value(payload).unwrap();

        assert_eq!(response.total, 144);
        assert_eq!(response.businesses.len(), 2);
        assert_eq!(
            response.businesses[0]["id"].as_str(),
            Some("bella-on-the-river-san-antonio")
        );
        assert_eq!(response.region.unwrap().center.latitude, 29.426786);
    }

    #[test]
    fn it_tolerates_a_missing_region() {
        let response: SearchResponse =
            serde_json::from_value(json!({ "total": 0, "businesses": [] })).unwrap();

        assert_eq!(response.total, 0);
        assert!(response.region.is_none());
    }
}
