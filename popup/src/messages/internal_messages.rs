use crate::popup_actors::session::View;
use crate::popup_actors::ui_handler::UiHandler;
use actix::prelude::*;
use common::errors::FetchError;
use common::messages::network_messages::ReminderNotification;
use common::types::candidate::{RestaurantCandidate, WheelOption};
use common::types::history::HistoryEntry;
use common::types::settings::{Settings, SettingsPatch};

/////////////////////////////////////////////////////////////////////
// Settings store messages
/////////////////////////////////////////////////////////////////////

/// Message to load the current settings.
///
/// ## Purpose
/// Reads the persisted record and merges it over the defaults; a missing or
/// unreadable record yields pure defaults.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Settings")]
pub struct GetSettings;

/// Message to merge a partial settings update into the persisted record.
///
/// ## Purpose
/// Only the `Some` fields of the patch are written; everything else,
/// history included, stays as persisted.
///
/// ## Contents
/// - `patch`: The fields to overwrite.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct SaveSettings {
    pub patch: SettingsPatch,
}

/// Message to append a selection to the bounded history.
///
/// ## Purpose
/// The history-recorder operation: stamps the entry with the current local
/// time, evicts the oldest entry past the cap, persists.
///
/// ## Contents
/// - `name`: The selected restaurant's name.
/// - `maps_link`: Its Google Maps link.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RecordSelection {
    pub name: String,
    pub maps_link: String,
}

/// Message to read the persisted history.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<HistoryEntry>")]
pub struct GetHistory;

/////////////////////////////////////////////////////////////////////
// Session messages
/////////////////////////////////////////////////////////////////////

/// Message kicking off the geolocate-fetch-sample flow.
///
/// ## Purpose
/// Sent on startup, on `refresh`, and after every settings save. A fetch
/// started while another is in flight is not cancelled; the session applies
/// results in arrival order, so the last one wins.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct FetchRestaurants;

/// Deduplicated candidates coming back from a finished fetch.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct CandidatesReady {
    pub candidates: Vec<RestaurantCandidate>,
}

/// A fetch attempt ended in one of the terminal failure kinds.
#[derive(Message, Debug)]
#[rtype(result = "()")]
pub struct FetchFailed {
    pub error: FetchError,
}

/// Spins the wheel; the winner goes straight to the history recorder.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct SpinWheel;

// View toggles. Exactly one view is active after any of these.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ShowMain;

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ShowSettings;

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ShowHistory;

/// The parsed settings form: save, close the form, refetch.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct SaveSettingsInput {
    pub patch: SettingsPatch,
}

/// Wires the UI handler address into the session once both actors exist.
#[derive(Message)]
#[rtype(result = "()")]
pub struct AttachUi {
    pub ui: Addr<UiHandler>,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "View")]
pub struct GetView;

#[derive(Message, Debug, Clone)]
#[rtype(result = "Vec<WheelOption>")]
pub struct GetWheelOptions;

#[derive(Message, Debug, Clone)]
#[rtype(result = "bool")]
pub struct GetWheelVisible;

/////////////////////////////////////////////////////////////////////
// UI messages
/////////////////////////////////////////////////////////////////////

/// One line the user typed, handed over from the stdin reader task.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct UserInput {
    pub line: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderLoading;

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderWheel {
    pub options: Vec<WheelOption>,
}

/// Announces a spin result; `options` feed the little roulette animation.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderWinner {
    pub winner: WheelOption,
    pub options: Vec<WheelOption>,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderSettingsForm {
    pub settings: Settings,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderHistory {
    pub history: Vec<HistoryEntry>,
}

/// The one user-facing alert of a failed fetch attempt.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderAlert {
    pub text: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderNotification {
    pub notification: ReminderNotification,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct RenderInfo {
    pub text: String,
}
