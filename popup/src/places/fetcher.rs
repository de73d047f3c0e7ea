use common::constants::{API_KEY_ENV, API_KEY_PLACEHOLDER, PLACES_SEARCH_URL, SEARCH_KEYWORD};
use common::errors::FetchError;
use common::types::candidate::RestaurantCandidate;
use common::types::settings::Settings;
use common::utils::{maps_link, miles_to_meters, price_bounds, price_tier};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw nearby-search response body, limited to the fields the popup reads.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub price_level: Option<u8>,
    pub geometry: Geometry,
    pub place_id: String,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Builds the nearby-search query for the given settings and position.
/// Radius goes out in meters; the price bounds are the first and last
/// components of the stored price range.
pub fn build_search_query(settings: &Settings, position: (f64, f64)) -> Vec<(String, String)> {
    let (minprice, maxprice) = price_bounds(&settings.price);
    vec![
        ("location".to_string(), format!("{},{}", position.0, position.1)),
        (
            "radius".to_string(),
            miles_to_meters(settings.distance).to_string(),
        ),
        ("type".to_string(), "restaurant".to_string()),
        ("keyword".to_string(), SEARCH_KEYWORD.to_string()),
        ("minprice".to_string(), minprice),
        ("maxprice".to_string(), maxprice),
        ("key".to_string(), api_key()),
    ]
}

fn api_key() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_else(|_| API_KEY_PLACEHOLDER.to_string())
}

/// One GET against the places service. The attempt is terminal on any
/// failure; the caller alerts exactly once and goes back to idle.
pub async fn fetch_restaurants(
    http: &reqwest::Client,
    settings: &Settings,
    position: (f64, f64),
) -> Result<Vec<RestaurantCandidate>, FetchError> {
    let response = http
        .get(PLACES_SEARCH_URL)
        .query(&build_search_query(settings, position))
        .send()
        .await
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;
    let body: PlacesResponse = response
        .json()
        .await
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;
    candidates_from_response(body, settings)
}

/// Maps raw places into candidates and dedupes by name, first occurrence
/// wins. An empty result set is an error of its own so zero results alert
/// like the other failure kinds.
pub fn candidates_from_response(
    body: PlacesResponse,
    settings: &Settings,
) -> Result<Vec<RestaurantCandidate>, FetchError> {
    if body.results.is_empty() {
        return Err(FetchError::NoResults);
    }

    let mut seen = HashSet::new();
    let candidates = body
        .results
        .into_iter()
        .filter_map(|place| {
            if !seen.insert(place.name.clone()) {
                return None;
            }
            Some(RestaurantCandidate {
                distance_miles: (settings.distance * 10.0).round() / 10.0,
                price_tier: price_tier(place.price_level),
                lat: place.geometry.location.lat,
                lng: place.geometry.location.lng,
                maps_link: maps_link(&place.place_id),
                place_id: place.place_id,
                name: place.name,
            })
        })
        .collect();
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_value(query: &[(String, String)], key: &str) -> String {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("missing query parameter: {}", key))
    }

    fn response(json: &str) -> PlacesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn query_converts_miles_and_splits_price_bounds() {
        let settings = Settings {
            distance: 1.0,
            price: "1,2,4".to_string(),
            ..Settings::default()
        };
        let query = build_search_query(&settings, (40.7128, -74.006));

        assert_eq!(query_value(&query, "location"), "40.7128,-74.006");
        assert_eq!(query_value(&query, "radius"), "1609.34");
        assert_eq!(query_value(&query, "type"), "restaurant");
        assert_eq!(query_value(&query, "keyword"), "healthy");
        assert_eq!(query_value(&query, "minprice"), "1");
        assert_eq!(query_value(&query, "maxprice"), "4");
        assert!(query.iter().any(|(k, _)| k == "key"));
    }

    #[test]
    fn default_price_range_maps_to_its_own_bounds() {
        let settings = Settings::default();
        let query = build_search_query(&settings, (0.0, 0.0));
        assert_eq!(query_value(&query, "minprice"), "2");
        assert_eq!(query_value(&query, "maxprice"), "3");
    }

    #[test]
    fn duplicate_names_keep_the_first_occurrence() {
        let body = response(
            r#"{"results": [
                {"name": "A", "price_level": 1, "place_id": "first-a",
                 "geometry": {"location": {"lat": 1.0, "lng": 2.0}}},
                {"name": "A", "price_level": 4, "place_id": "second-a",
                 "geometry": {"location": {"lat": 3.0, "lng": 4.0}}},
                {"name": "B", "place_id": "only-b",
                 "geometry": {"location": {"lat": 5.0, "lng": 6.0}}}
            ]}"#,
        );
        let candidates = candidates_from_response(body, &Settings::default()).unwrap();

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(candidates[0].place_id, "first-a");
        assert_eq!(candidates[0].price_tier, "$");
        assert_eq!(candidates[1].price_tier, "Unknown");
    }

    #[test]
    fn candidates_carry_maps_link_and_radius_distance() {
        let body = response(
            r#"{"results": [
                {"name": "Sweetgreen", "price_level": 2, "place_id": "sg-1",
                 "geometry": {"location": {"lat": 40.7, "lng": -74.0}}}
            ]}"#,
        );
        let settings = Settings {
            distance: 0.5,
            ..Settings::default()
        };
        let candidates = candidates_from_response(body, &settings).unwrap();

        assert_eq!(
            candidates[0].maps_link,
            "https://www.google.com/maps/place/?q=place_id:sg-1"
        );
        assert_eq!(candidates[0].distance_miles, 0.5);
        assert_eq!(candidates[0].lat, 40.7);
        assert_eq!(candidates[0].lng, -74.0);
    }

    #[test]
    fn empty_results_are_their_own_failure_kind() {
        let err = candidates_from_response(response(r#"{"results": []}"#), &Settings::default())
            .unwrap_err();
        assert!(matches!(err, FetchError::NoResults));

        let err = candidates_from_response(response(r#"{}"#), &Settings::default()).unwrap_err();
        assert!(matches!(err, FetchError::NoResults));
    }
}
