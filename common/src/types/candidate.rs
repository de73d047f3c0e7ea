use serde::{Deserialize, Serialize};

/// A restaurant returned by the places search, after mapping. Rebuilt on
/// every fetch and deduplicated by name before it can reach the wheel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCandidate {
    pub name: String,
    /// The configured search radius, shown to one decimal.
    pub distance_miles: f64,
    /// "$" per price level, or "Unknown".
    pub price_tier: String,
    pub lat: f64,
    pub lng: f64,
    pub place_id: String,
    pub maps_link: String,
}

/// One wheel slot: exactly the candidate fields a spin needs. At most eight
/// exist per popup session, replaced on every fetch or settings save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelOption {
    pub name: String,
    pub maps_link: String,
}

impl From<&RestaurantCandidate> for WheelOption {
    fn from(candidate: &RestaurantCandidate) -> Self {
        WheelOption {
            name: candidate.name.clone(),
            maps_link: candidate.maps_link.clone(),
        }
    }
}
