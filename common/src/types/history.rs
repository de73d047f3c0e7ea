use crate::constants::HISTORY_LIMIT;
use serde::{Deserialize, Serialize};

/// One recorded lunch selection. Owned by [`Settings`](super::settings::Settings);
/// only the record-selection operation appends, and the log never exceeds
/// [`HISTORY_LIMIT`] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    /// Local timestamp, "YYYY-MM-DD HH:MM:SS".
    pub timestamp: String,
    #[serde(rename = "googleMapsLink")]
    pub maps_link: String,
}

/// Appends an entry, evicting from the front while the log is over the cap.
pub fn push_bounded(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.push(entry);
    while history.len() > HISTORY_LIMIT {
        history.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry {
            name: format!("restaurant-{}", n),
            timestamp: format!("2026-08-07 12:00:{:02}", n),
            maps_link: format!("https://www.google.com/maps/place/?q=place_id:id-{}", n),
        }
    }

    #[test]
    fn stays_within_cap_and_evicts_oldest_first() {
        let mut history = Vec::new();
        for n in 0..12 {
            push_bounded(&mut history, entry(n));
            assert!(history.len() <= HISTORY_LIMIT);
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        // Entries 0 and 1 were evicted; the rest keep insertion order.
        assert_eq!(history.first().unwrap().name, "restaurant-2");
        assert_eq!(history.last().unwrap().name, "restaurant-11");
        for (i, item) in history.iter().enumerate() {
            assert_eq!(item.name, format!("restaurant-{}", i + 2));
        }
    }

    #[test]
    fn short_history_is_untouched() {
        let mut history = Vec::new();
        for n in 0..3 {
            push_bounded(&mut history, entry(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].name, "restaurant-0");
    }

    #[test]
    fn maps_link_round_trips_through_original_field_name() {
        let serialized = serde_json::to_string(&entry(1)).unwrap();
        assert!(serialized.contains("\"googleMapsLink\""));
        let back: HistoryEntry = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, entry(1));
    }
}
