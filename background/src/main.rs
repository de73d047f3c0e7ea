use actix::Actor;
use common::constants::{BACKGROUND_IP_ADDRESS, BACKGROUND_PORT};
use std::net::SocketAddr;
use tokio::signal::ctrl_c;

mod acceptor;
mod background_actors;
mod messages;

use crate::acceptor::Acceptor;
use crate::background_actors::relay::Relay;
use crate::background_actors::reminder::Reminder;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let addr: SocketAddr = format!("{}:{}", BACKGROUND_IP_ADDRESS, BACKGROUND_PORT)
        .parse()
        .expect("Invalid background address");

    let relay = Relay::new().start();
    let _reminder = Reminder::new(relay.clone()).start();
    let acceptor = Acceptor::new(addr);

    tokio::select! {
        result = acceptor.run(relay) => result,
        _ = ctrl_c() => {
            println!("Ctrl-C received, shutting down background context.");
            actix::System::current().stop();
            Ok(())
        }
    }
}
