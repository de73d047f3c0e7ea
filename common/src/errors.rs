use thiserror::Error;

/// The failure kinds a fetch attempt can end in. All three are terminal for
/// the attempt: one user-facing alert, the popup goes back to its idle view,
/// nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("location access denied or unavailable")]
    LocationDenied,
    #[error("places request failed: {0}")]
    RequestFailed(String),
    #[error("no restaurants found")]
    NoResults,
}

impl FetchError {
    /// The alert text shown to the user for each failure kind.
    pub fn alert_text(&self) -> &'static str {
        match self {
            FetchError::LocationDenied => {
                "Please enable location access to fetch restaurants."
            }
            FetchError::RequestFailed(_) => {
                "Could not fetch restaurants. Check your connection and try again."
            }
            FetchError::NoResults => "No restaurants found! Try adjusting your settings.",
        }
    }
}
