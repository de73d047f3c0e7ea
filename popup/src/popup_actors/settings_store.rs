use crate::messages::internal_messages::{GetHistory, GetSettings, RecordSelection, SaveSettings};
use actix::prelude::*;
use chrono::Local;
use colored::Color;
use common::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use common::logger::Logger;
use common::types::history::{HistoryEntry, push_bounded};
use common::types::settings::Settings;
use std::fs;
use std::path::PathBuf;

/// The `SettingsStore` actor owns the one persisted settings record.
///
/// ## Responsibilities:
/// - Load the record, merging persisted fields over the defaults.
/// - Merge partial saves from the settings form into the record.
/// - Append spin selections to the bounded history (oldest out first).
///
/// No locking: the popup is assumed to be the only writer. Storage failures
/// are logged where they happen and have no taxonomy of their own.
pub struct SettingsStore {
    /// Where the record lives on disk.
    pub path: PathBuf,
    pub logger: Logger,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        SettingsStore {
            path,
            logger: Logger::new("Settings Store", Color::White),
        }
    }

    /// Default record location: `<config_dir>/lunch-lotto/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(SETTINGS_DIR_NAME)
            .join(SETTINGS_FILE_NAME)
    }

    fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    self.logger
                        .warn(format!("Unreadable settings record ({}); using defaults.", e));
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    fn persist(&self, settings: &Settings) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                self.logger
                    .error(format!("Failed to create settings directory: {}", e));
                return;
            }
        }
        match serde_json::to_string_pretty(settings) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    self.logger.error(format!("Failed to persist settings: {}", e));
                }
            }
            Err(e) => {
                self.logger.error(format!("Failed to encode settings: {}", e));
            }
        }
    }
}

impl Actor for SettingsStore {
    type Context = Context<Self>;
}

/// Handles settings reads: persisted fields merged over defaults.
impl Handler<GetSettings> for SettingsStore {
    type Result = MessageResult<GetSettings>;

    fn handle(&mut self, _msg: GetSettings, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.load())
    }
}

/// Handles partial saves from the settings form.
impl Handler<SaveSettings> for SettingsStore {
    type Result = ();

    fn handle(&mut self, msg: SaveSettings, _ctx: &mut Self::Context) -> Self::Result {
        let mut settings = self.load();
        settings.apply(msg.patch);
        self.persist(&settings);
        self.logger.info("Settings saved.");
    }
}

/// Handles the record-selection operation: stamp, append, evict, persist.
impl Handler<RecordSelection> for SettingsStore {
    type Result = ();

    fn handle(&mut self, msg: RecordSelection, _ctx: &mut Self::Context) -> Self::Result {
        let mut settings = self.load();
        push_bounded(
            &mut settings.history,
            HistoryEntry {
                name: msg.name,
                timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                maps_link: msg.maps_link,
            },
        );
        self.persist(&settings);
        self.logger
            .info(format!("Updated history ({} entries).", settings.history.len()));
    }
}

impl Handler<GetHistory> for SettingsStore {
    type Result = MessageResult<GetHistory>;

    fn handle(&mut self, _msg: GetHistory, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.load().history)
    }
}
