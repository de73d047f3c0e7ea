use crate::messages::internal_messages::{
    AttachUi, CandidatesReady, FetchFailed, FetchRestaurants, GetHistory, GetSettings, GetView,
    GetWheelOptions, GetWheelVisible, RecordSelection, RenderAlert, RenderHistory, RenderInfo,
    RenderLoading, RenderNotification, RenderSettingsForm, RenderWheel, RenderWinner,
    SaveSettings, SaveSettingsInput, ShowHistory, ShowMain, ShowSettings, SpinWheel,
};
use crate::places::{fetcher, geo};
use crate::popup_actors::settings_store::SettingsStore;
use crate::popup_actors::ui_handler::UiHandler;
use crate::popup_actors::wheel;
use actix::prelude::*;
use colored::Color;
use common::constants::WHEEL_REVEAL_DELAY;
use common::errors::FetchError;
use common::logger::Logger;
use common::messages::network_messages::NetworkMessage;
use common::network::communicator::Communicator;
use common::network::peer_types::PeerType;
use common::types::candidate::{RestaurantCandidate, WheelOption};
use tokio::net::TcpStream;

/// The three popup views. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    Settings,
    History,
}

/// The `PopupSession` actor owns one popup lifetime of state: the current
/// candidate list, the current wheel options and the active view.
///
/// ## Responsibilities:
/// - Drive the geolocate-fetch-sample flow and apply its outcome.
/// - Keep the wheel hidden until the fixed reveal delay has passed.
/// - Route spins into the history recorder.
/// - Toggle views, keeping exactly one active.
/// - Fold relayed messages from the background context into the same paths.
pub struct PopupSession {
    pub settings_store: Addr<SettingsStore>,
    pub ui: Option<Addr<UiHandler>>,
    pub http: reqwest::Client,
    /// Deduplicated candidates from the last finished fetch.
    pub candidates: Vec<RestaurantCandidate>,
    /// The ≤ 8 options currently on the wheel.
    pub wheel_options: Vec<WheelOption>,
    pub view: View,
    /// False while loading and after a failed fetch (the idle state).
    pub wheel_visible: bool,
    /// Link to the background context, when it was reachable at startup.
    pub communicator: Option<Communicator<PopupSession>>,
    pub pending_stream: Option<TcpStream>,
    pub logger: Logger,
}

impl PopupSession {
    pub fn new(settings_store: Addr<SettingsStore>, pending_stream: Option<TcpStream>) -> Self {
        PopupSession {
            settings_store,
            ui: None,
            http: reqwest::Client::new(),
            candidates: Vec::new(),
            wheel_options: Vec::new(),
            view: View::Main,
            wheel_visible: false,
            communicator: None,
            pending_stream,
            logger: Logger::new("Popup Session", Color::Green),
        }
    }
}

impl Actor for PopupSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        if let Some(stream) = self.pending_stream.take() {
            self.communicator = Some(Communicator::new(
                stream,
                ctx.address(),
                PeerType::BackgroundType,
            ));
            self.logger.info("Connected to the background context.");
        } else {
            self.logger
                .warn("Background context unreachable; reminders and relayed selections are off.");
        }
    }
}

impl Handler<AttachUi> for PopupSession {
    type Result = ();

    fn handle(&mut self, msg: AttachUi, _ctx: &mut Self::Context) -> Self::Result {
        self.ui = Some(msg.ui);
    }
}

/// Kicks off one fetch: settings, position, places query, dedup. The result
/// comes back as `CandidatesReady` or `FetchFailed`. In-flight fetches are
/// never cancelled; whichever finishes last is what the session keeps.
impl Handler<FetchRestaurants> for PopupSession {
    type Result = ();

    fn handle(&mut self, _msg: FetchRestaurants, ctx: &mut Self::Context) -> Self::Result {
        self.wheel_visible = false;
        if let Some(ui) = &self.ui {
            ui.do_send(RenderLoading);
        }

        let http = self.http.clone();
        let store = self.settings_store.clone();
        ctx.spawn(
            async move {
                let settings = store
                    .send(GetSettings)
                    .await
                    .map_err(|e| FetchError::RequestFailed(format!("settings store: {}", e)))?;
                let position = geo::current_position(&http).await?;
                fetcher::fetch_restaurants(&http, &settings, position).await
            }
            .into_actor(self)
            .map(|result, _act, ctx| match result {
                Ok(candidates) => ctx.address().do_send(CandidatesReady { candidates }),
                Err(error) => ctx.address().do_send(FetchFailed { error }),
            }),
        );
    }
}

/// Applies a finished fetch: store the candidates, sample the wheel, reveal
/// it after the fixed delay.
impl Handler<CandidatesReady> for PopupSession {
    type Result = ();

    fn handle(&mut self, msg: CandidatesReady, ctx: &mut Self::Context) -> Self::Result {
        self.logger
            .info(format!("{} unique restaurants fetched.", msg.candidates.len()));
        self.candidates = msg.candidates;
        self.wheel_options = wheel::sample_options(&self.candidates);

        // La ruleta aparece recién después del delay fijo.
        ctx.run_later(WHEEL_REVEAL_DELAY, |act, _ctx| {
            act.wheel_visible = true;
            if act.view == View::Main {
                if let Some(ui) = &act.ui {
                    ui.do_send(RenderWheel {
                        options: act.wheel_options.clone(),
                    });
                }
            }
        });
    }
}

/// One alert, back to idle. Nothing is retried.
impl Handler<FetchFailed> for PopupSession {
    type Result = ();

    fn handle(&mut self, msg: FetchFailed, _ctx: &mut Self::Context) -> Self::Result {
        self.logger.error(format!("Fetch failed: {}", msg.error));
        self.candidates.clear();
        self.wheel_options.clear();
        self.wheel_visible = false;
        if let Some(ui) = &self.ui {
            ui.do_send(RenderAlert {
                text: msg.error.alert_text().to_string(),
            });
        }
    }
}

/// Spins the wheel and records the winner.
impl Handler<SpinWheel> for PopupSession {
    type Result = ();

    fn handle(&mut self, _msg: SpinWheel, _ctx: &mut Self::Context) -> Self::Result {
        if self.view != View::Main {
            self.logger.warn("Spin ignored outside the wheel view.");
            return;
        }
        if !self.wheel_visible || self.wheel_options.is_empty() {
            self.logger.warn("Nothing on the wheel yet.");
            return;
        }

        if let Some(winner) = wheel::pick_winner(&self.wheel_options).cloned() {
            if let Some(ui) = &self.ui {
                ui.do_send(RenderWinner {
                    winner: winner.clone(),
                    options: self.wheel_options.clone(),
                });
            }
            self.settings_store.do_send(RecordSelection {
                name: winner.name,
                maps_link: winner.maps_link,
            });
        }
    }
}

impl Handler<ShowMain> for PopupSession {
    type Result = ();

    fn handle(&mut self, _msg: ShowMain, _ctx: &mut Self::Context) -> Self::Result {
        self.view = View::Main;
        if let Some(ui) = &self.ui {
            if self.wheel_visible {
                ui.do_send(RenderWheel {
                    options: self.wheel_options.clone(),
                });
            } else {
                ui.do_send(RenderInfo {
                    text: "No wheel yet. Type `refresh` to fetch restaurants.".to_string(),
                });
            }
        }
    }
}

impl Handler<ShowSettings> for PopupSession {
    type Result = ();

    fn handle(&mut self, _msg: ShowSettings, ctx: &mut Self::Context) -> Self::Result {
        self.view = View::Settings;
        let store = self.settings_store.clone();
        let ui = self.ui.clone();
        async move { store.send(GetSettings).await }
            .into_actor(self)
            .map(move |res, act, _ctx| match res {
                Ok(settings) => {
                    if let Some(ui) = &ui {
                        ui.do_send(RenderSettingsForm { settings });
                    }
                }
                Err(e) => act.logger.error(format!("Settings load failed: {}", e)),
            })
            .wait(ctx);
    }
}

impl Handler<ShowHistory> for PopupSession {
    type Result = ();

    fn handle(&mut self, _msg: ShowHistory, ctx: &mut Self::Context) -> Self::Result {
        self.view = View::History;
        let store = self.settings_store.clone();
        let ui = self.ui.clone();
        async move { store.send(GetHistory).await }
            .into_actor(self)
            .map(move |res, act, _ctx| match res {
                Ok(history) => {
                    if let Some(ui) = &ui {
                        ui.do_send(RenderHistory { history });
                    }
                }
                Err(e) => act.logger.error(format!("History load failed: {}", e)),
            })
            .wait(ctx);
    }
}

/// Saves the form, confirms, closes the settings view and refetches with the
/// new settings.
impl Handler<SaveSettingsInput> for PopupSession {
    type Result = ();

    fn handle(&mut self, msg: SaveSettingsInput, ctx: &mut Self::Context) -> Self::Result {
        let store = self.settings_store.clone();
        let ui = self.ui.clone();
        async move { store.send(SaveSettings { patch: msg.patch }).await }
            .into_actor(self)
            .map(move |res, act, ctx| match res {
                Ok(()) => {
                    if let Some(ui) = &ui {
                        ui.do_send(RenderInfo {
                            text: "Settings saved!".to_string(),
                        });
                    }
                    act.view = View::Main;
                    ctx.address().do_send(FetchRestaurants);
                }
                Err(e) => act.logger.error(format!("Settings save failed: {}", e)),
            })
            .wait(ctx);
    }
}

/// Messages relayed from the background context: selections go to the
/// history recorder, reminders to the screen.
impl Handler<NetworkMessage> for PopupSession {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, _ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::SelectRestaurant(selection) => {
                self.logger
                    .info(format!("Selection relayed from background: {}", selection.name));
                self.settings_store.do_send(RecordSelection {
                    name: selection.name,
                    maps_link: selection.maps_link,
                });
            }
            NetworkMessage::ReminderNotification(notification) => {
                if let Some(ui) = &self.ui {
                    ui.do_send(RenderNotification { notification });
                }
            }
            NetworkMessage::ConnectionClosed(_) => {
                self.logger
                    .warn("Background connection closed; relay and reminders are offline.");
                self.communicator = None;
            }
        }
    }
}

impl Handler<GetView> for PopupSession {
    type Result = MessageResult<GetView>;

    fn handle(&mut self, _msg: GetView, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.view)
    }
}

impl Handler<GetWheelOptions> for PopupSession {
    type Result = MessageResult<GetWheelOptions>;

    fn handle(&mut self, _msg: GetWheelOptions, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.wheel_options.clone())
    }
}

impl Handler<GetWheelVisible> for PopupSession {
    type Result = bool;

    fn handle(&mut self, _msg: GetWheelVisible, _ctx: &mut Self::Context) -> Self::Result {
        self.wheel_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::constants::WHEEL_SIZE;
    use std::collections::HashSet;
    use tokio::time::{Duration, sleep};

    fn test_store(name: &str) -> Addr<SettingsStore> {
        let path = std::env::temp_dir().join(format!(
            "lunch-lotto-session-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        SettingsStore::new(path).start()
    }

    fn candidates(n: usize) -> Vec<RestaurantCandidate> {
        (0..n)
            .map(|i| RestaurantCandidate {
                name: format!("restaurant-{}", i),
                distance_miles: 0.5,
                price_tier: "$$".to_string(),
                lat: 0.0,
                lng: 0.0,
                place_id: format!("id-{}", i),
                maps_link: format!("https://www.google.com/maps/place/?q=place_id:id-{}", i),
            })
            .collect()
    }

    #[actix_rt::test]
    async fn exactly_one_view_after_any_toggle() {
        let session = PopupSession::new(test_store("views"), None).start();
        assert_eq!(session.send(GetView).await.unwrap(), View::Main);

        session.send(ShowSettings).await.unwrap();
        assert_eq!(session.send(GetView).await.unwrap(), View::Settings);

        session.send(ShowHistory).await.unwrap();
        assert_eq!(session.send(GetView).await.unwrap(), View::History);

        session.send(ShowMain).await.unwrap();
        assert_eq!(session.send(GetView).await.unwrap(), View::Main);
    }

    #[actix_rt::test]
    async fn wheel_samples_at_most_eight_and_reveals_after_delay() {
        let session = PopupSession::new(test_store("reveal"), None).start();
        session
            .send(CandidatesReady {
                candidates: candidates(12),
            })
            .await
            .unwrap();

        let options = session.send(GetWheelOptions).await.unwrap();
        assert_eq!(options.len(), WHEEL_SIZE);
        let names: HashSet<&str> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names.len(), WHEEL_SIZE);
        // Sampled immediately, revealed only after the fixed delay.
        assert!(!session.send(GetWheelVisible).await.unwrap());

        sleep(WHEEL_REVEAL_DELAY + Duration::from_millis(200)).await;
        assert!(session.send(GetWheelVisible).await.unwrap());
    }

    #[actix_rt::test]
    async fn failed_fetch_reverts_to_idle() {
        let session = PopupSession::new(test_store("idle"), None).start();
        session
            .send(CandidatesReady {
                candidates: candidates(4),
            })
            .await
            .unwrap();
        sleep(WHEEL_REVEAL_DELAY + Duration::from_millis(200)).await;
        assert!(session.send(GetWheelVisible).await.unwrap());

        session
            .send(FetchFailed {
                error: FetchError::NoResults,
            })
            .await
            .unwrap();
        assert!(!session.send(GetWheelVisible).await.unwrap());
        assert!(session.send(GetWheelOptions).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn spin_records_the_winner_to_history() {
        let store = test_store("spin");
        let session = PopupSession::new(store.clone(), None).start();
        session
            .send(CandidatesReady {
                candidates: candidates(3),
            })
            .await
            .unwrap();
        sleep(WHEEL_REVEAL_DELAY + Duration::from_millis(200)).await;

        session.send(SpinWheel).await.unwrap();

        let history = store.send(GetHistory).await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].name.starts_with("restaurant-"));
    }

    #[actix_rt::test]
    async fn spin_before_reveal_records_nothing() {
        let store = test_store("early-spin");
        let session = PopupSession::new(store.clone(), None).start();
        session
            .send(CandidatesReady {
                candidates: candidates(3),
            })
            .await
            .unwrap();

        // Still hidden: the spin must be ignored.
        session.send(SpinWheel).await.unwrap();
        let history = store.send(GetHistory).await.unwrap();
        assert!(history.is_empty());
    }

    #[actix_rt::test]
    async fn relayed_selection_lands_in_history() {
        let store = test_store("relayed");
        let session = PopupSession::new(store.clone(), None).start();

        session
            .send(NetworkMessage::SelectRestaurant(
                common::messages::network_messages::SelectRestaurant {
                    name: "Chopt".to_string(),
                    maps_link: "https://www.google.com/maps/place/?q=place_id:chopt".to_string(),
                },
            ))
            .await
            .unwrap();

        let history = store.send(GetHistory).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].name, "Chopt");
    }
}
