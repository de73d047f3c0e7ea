use common::constants::{GEOLOCATION_URL, POSITION_ENV};
use common::errors::FetchError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeoResponse {
    lat: f64,
    lon: f64,
}

/// Single-shot position lookup: the `LUNCH_LOTTO_POSITION` override first,
/// then one IP-geolocation request. Every failure collapses into
/// [`FetchError::LocationDenied`]; there is no retry.
pub async fn current_position(http: &reqwest::Client) -> Result<(f64, f64), FetchError> {
    if let Ok(raw) = std::env::var(POSITION_ENV) {
        return parse_position(&raw).ok_or(FetchError::LocationDenied);
    }

    let response = http
        .get(GEOLOCATION_URL)
        .send()
        .await
        .map_err(|_| FetchError::LocationDenied)?;
    let geo: GeoResponse = response
        .json()
        .await
        .map_err(|_| FetchError::LocationDenied)?;
    Ok((geo.lat, geo.lon))
}

/// Parses a "lat,lng" pair.
pub fn parse_position(raw: &str) -> Option<(f64, f64)> {
    let (lat, lng) = raw.split_once(',')?;
    Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_lat_lng_pair() {
        assert_eq!(parse_position("40.7128,-74.0060"), Some((40.7128, -74.0060)));
        assert_eq!(parse_position(" 40.5 , -73.9 "), Some((40.5, -73.9)));
    }

    #[test]
    fn rejects_malformed_positions() {
        assert_eq!(parse_position("40.7128"), None);
        assert_eq!(parse_position("north,south"), None);
        assert_eq!(parse_position(""), None);
    }

    #[test]
    fn geolocation_body_decodes() {
        let geo: GeoResponse =
            serde_json::from_str(r#"{"status":"success","lat":40.7128,"lon":-74.006}"#).unwrap();
        assert_eq!(geo.lat, 40.7128);
        assert_eq!(geo.lon, -74.006);
    }
}
