use crate::constants::METERS_PER_MILE;

pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Renders a Places `price_level` (1-4) the way the wheel shows it.
pub fn price_tier(price_level: Option<u8>) -> String {
    match price_level {
        Some(level) if level > 0 => "$".repeat(level as usize),
        _ => "Unknown".to_string(),
    }
}

pub fn maps_link(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{}", place_id)
}

/// First and last comma-separated components of the stored price range:
/// "2,3" -> ("2", "3"), "1,2,4" -> ("1", "4"). A string without commas is
/// used as both bounds.
pub fn price_bounds(price: &str) -> (String, String) {
    let mut parts = price.split(',').map(str::trim).filter(|p| !p.is_empty());
    let first = parts.next().unwrap_or("").to_string();
    let last = parts.last().map(str::to_string).unwrap_or_else(|| first.clone());
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_mile_is_google_meters() {
        assert_eq!(miles_to_meters(1.0), 1609.34);
    }

    #[test]
    fn price_tier_renders_dollar_signs() {
        assert_eq!(price_tier(Some(3)), "$$$");
        assert_eq!(price_tier(Some(1)), "$");
    }

    #[test]
    fn price_tier_unknown_when_absent() {
        assert_eq!(price_tier(None), "Unknown");
        assert_eq!(price_tier(Some(0)), "Unknown");
    }

    #[test]
    fn price_bounds_takes_first_and_last_component() {
        assert_eq!(price_bounds("2,3"), ("2".to_string(), "3".to_string()));
        assert_eq!(price_bounds("1,2,4"), ("1".to_string(), "4".to_string()));
    }

    #[test]
    fn price_bounds_single_value_is_both_bounds() {
        assert_eq!(price_bounds("3"), ("3".to_string(), "3".to_string()));
    }

    #[test]
    fn maps_link_embeds_place_id() {
        assert_eq!(
            maps_link("abc123"),
            "https://www.google.com/maps/place/?q=place_id:abc123"
        );
    }
}
