use crate::messages::internal_messages::{Broadcast, GetPeerCount, NewPeerConnection};
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::messages::network_messages::NetworkMessage;
use common::network::communicator::Communicator;
use common::network::peer_types::PeerType;
use std::collections::HashMap;
use std::net::SocketAddr;

/// The `Relay` actor is the background context's message pass-through.
///
/// ## Responsibilities:
/// - Keep one communicator per connected context (normally the open popup).
/// - Re-broadcast every `SelectRestaurant` it receives, verbatim, to all
///   connected peers.
/// - Prune peers whose connection closed.
///
/// Delivery is at-most-once and fire-and-forget: with zero peers connected
/// a message is logged and dropped, never queued.
pub struct Relay {
    /// Connected contexts, keyed by remote address.
    pub peers: HashMap<SocketAddr, Communicator<Relay>>,
    pub logger: Logger,
}

impl Relay {
    pub fn new() -> Self {
        Relay {
            peers: HashMap::new(),
            logger: Logger::new("Relay", Color::Cyan),
        }
    }

    fn broadcast(&self, message: &NetworkMessage) {
        if self.peers.is_empty() {
            self.logger
                .warn("No popup connected; dropping message (at-most-once).");
            return;
        }
        for communicator in self.peers.values() {
            communicator.send(message.clone());
        }
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for Relay {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Relay started.");
    }
}

/// Handles a freshly accepted connection by wrapping it in a communicator
/// whose inbound side points back at this relay.
impl Handler<NewPeerConnection> for Relay {
    type Result = ();

    fn handle(&mut self, msg: NewPeerConnection, ctx: &mut Self::Context) -> Self::Result {
        let communicator = Communicator::new(msg.stream, ctx.address(), PeerType::PopupType);
        self.logger.info(format!(
            "{:?} connected from {}",
            communicator.peer_type, communicator.remote_addr
        ));
        self.peers.insert(communicator.remote_addr, communicator);
    }
}

/// Handles inbound traffic from any connected peer.
impl Handler<NetworkMessage> for Relay {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, _ctx: &mut Self::Context) -> Self::Result {
        match msg {
            NetworkMessage::SelectRestaurant(selection) => {
                self.logger
                    .info(format!("Relaying selection: {}", selection.name));
                self.broadcast(&NetworkMessage::SelectRestaurant(selection));
            }
            NetworkMessage::ReminderNotification(_) => {
                // Reminders originate here; one arriving from a peer is noise.
                self.logger.warn("Ignoring inbound reminder from a peer.");
            }
            NetworkMessage::ConnectionClosed(closed) => {
                if let Some(communicator) = self.peers.remove(&closed.remote_addr) {
                    communicator.shutdown();
                    self.logger
                        .info(format!("Peer disconnected: {}", closed.remote_addr));
                }
            }
        }
    }
}

/// Handles broadcast requests from the reminder scheduler.
impl Handler<Broadcast> for Relay {
    type Result = ();

    fn handle(&mut self, msg: Broadcast, _ctx: &mut Self::Context) -> Self::Result {
        self.broadcast(&msg.message);
    }
}

impl Handler<GetPeerCount> for Relay {
    type Result = usize;

    fn handle(&mut self, _msg: GetPeerCount, _ctx: &mut Self::Context) -> Self::Result {
        self.peers.len()
    }
}
