use crate::constants::{DEFAULT_PRICE_RANGE, DEFAULT_SEARCH_RADIUS_MILES};
use crate::types::history::HistoryEntry;
use serde::{Deserialize, Serialize};

/// The one persisted settings record. Fields missing from the stored JSON
/// fall back to the defaults, so a record written by an older build still
/// loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Search radius in miles.
    #[serde(default = "default_distance")]
    pub distance: f64,
    /// Price range as "min,max" tiers (Places uses 1-4).
    #[serde(default = "default_price")]
    pub price: String,
    /// Dietary filter. Empty means no filter.
    #[serde(default)]
    pub dietary: String,
    /// Past selections, oldest first, capped at ten entries.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

fn default_distance() -> f64 {
    DEFAULT_SEARCH_RADIUS_MILES
}

fn default_price() -> String {
    DEFAULT_PRICE_RANGE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            distance: default_distance(),
            price: default_price(),
            dietary: String::new(),
            history: Vec::new(),
        }
    }
}

impl Settings {
    /// Applies the `Some` fields of a patch. Everything else, history
    /// included, is left untouched.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(distance) = patch.distance {
            self.distance = distance;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(dietary) = patch.dietary {
            self.dietary = dietary;
        }
    }
}

/// A partial settings update: the keyed-write shape of the settings form.
/// History is deliberately not patchable here; it only changes through the
/// record-selection operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub distance: Option<f64>,
    pub price: Option<String>,
    pub dietary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_record() {
        let settings = Settings::default();
        assert_eq!(settings.distance, 0.5);
        assert_eq!(settings.price, "2,3");
        assert_eq!(settings.dietary, "");
        assert!(settings.history.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"distance": 1.5}"#).unwrap();
        assert_eq!(settings.distance, 1.5);
        assert_eq!(settings.price, "2,3");
        assert!(settings.history.is_empty());
    }

    #[test]
    fn apply_patches_only_provided_fields() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            distance: Some(2.0),
            price: None,
            dietary: None,
        });
        assert_eq!(settings.distance, 2.0);
        assert_eq!(settings.price, "2,3");

        settings.apply(SettingsPatch {
            distance: None,
            price: Some("1,4".to_string()),
            dietary: Some("vegetarian".to_string()),
        });
        assert_eq!(settings.distance, 2.0);
        assert_eq!(settings.price, "1,4");
        assert_eq!(settings.dietary, "vegetarian");
    }
}
