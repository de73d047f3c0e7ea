use actix::Actor;
use common::constants::{BACKGROUND_IP_ADDRESS, BACKGROUND_PORT};
use common::network::connections::connect;
use std::net::SocketAddr;
use tokio::signal::ctrl_c;

mod messages;
mod places;
mod popup_actors;

use crate::messages::internal_messages::{AttachUi, FetchRestaurants, UserInput};
use crate::popup_actors::session::PopupSession;
use crate::popup_actors::settings_store::SettingsStore;
use crate::popup_actors::ui_handler::UiHandler;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let background_addr: SocketAddr = format!("{}:{}", BACKGROUND_IP_ADDRESS, BACKGROUND_PORT)
        .parse()
        .expect("Invalid background address");

    let settings_store = SettingsStore::new(SettingsStore::default_path()).start();
    // El background puede no estar corriendo; el popup funciona igual.
    let stream = connect(background_addr).await;

    let session = PopupSession::new(settings_store, stream).start();
    let ui = UiHandler::new(session.clone()).start();
    session.do_send(AttachUi { ui: ui.clone() });
    session.do_send(FetchRestaurants);

    let input_ui = ui.clone();
    let stdin_task = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => input_ui.do_send(UserInput { line: line.clone() }),
            }
        }
    });

    tokio::select! {
        _ = ctrl_c() => {
            println!("Ctrl-C received, closing popup.");
        }
        _ = stdin_task => {}
    }
    actix::System::current().stop();
    Ok(())
}
