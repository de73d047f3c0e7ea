use std::time::Duration;

/// Google's nearby search takes its radius in meters.
pub const METERS_PER_MILE: f64 = 1609.34;
/// Upper bound on wheel slots per spin.
pub const WHEEL_SIZE: usize = 8;
/// History cap: the oldest entry is evicted once the log grows past this.
pub const HISTORY_LIMIT: usize = 10;

pub const BACKGROUND_IP_ADDRESS: &str = "127.0.0.1";
pub const BACKGROUND_PORT: u16 = 9090;

/// Fixed delay between candidates arriving and the wheel reveal.
pub const WHEEL_REVEAL_DELAY: Duration = Duration::from_secs(2);
/// Lunch reminder period. The first fire happens immediately on startup.
pub const REMINDER_PERIOD: Duration = Duration::from_secs(60 * 60 * 24);

pub const DEFAULT_SEARCH_RADIUS_MILES: f64 = 0.5;
/// Price range as "min,max" tiers; Places uses 1-4 ($ - $$$$).
pub const DEFAULT_PRICE_RANGE: &str = "2,3";
pub const SEARCH_KEYWORD: &str = "healthy";

pub const PLACES_SEARCH_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
pub const GEOLOCATION_URL: &str = "http://ip-api.com/json";

pub const API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";
pub const POSITION_ENV: &str = "LUNCH_LOTTO_POSITION";
/// Deployment prerequisite: replaced through GOOGLE_PLACES_API_KEY.
pub const API_KEY_PLACEHOLDER: &str = "add-your-api-key-here";

pub const SETTINGS_DIR_NAME: &str = "lunch-lotto";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
