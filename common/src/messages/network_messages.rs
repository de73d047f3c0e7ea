use actix::prelude::*;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Enum representing every message exchanged between the popup and
/// background contexts.
///
/// ## Purpose
/// One JSON value of this enum travels per line over the local TCP link.
/// The relay forwards these verbatim: no transformation, no queuing.
#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[serde(tag = "type")]
#[rtype(result = "()")]
pub enum NetworkMessage {
    /// A context selected a restaurant; the relay passes it to every popup.
    SelectRestaurant(SelectRestaurant),
    /// The daily lunch reminder, pushed from the background context.
    ReminderNotification(ReminderNotification),
    /// Notifies that a TCP connection has been closed.
    ConnectionClosed(ConnectionClosed),
}

/// Message carrying a restaurant selection between contexts.
///
/// ## Purpose
/// Lets a selection made outside the popup land in the popup's history
/// recorder. Delivery is at-most-once: with no popup connected the relay
/// drops it.
///
/// ## Contents
/// - `name`: The selected restaurant's name.
/// - `maps_link`: Its Google Maps link, stored alongside the history entry.
#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct SelectRestaurant {
    pub name: String,
    #[serde(rename = "googleMapsLink")]
    pub maps_link: String,
}

/// Message carrying the scheduled lunch reminder.
///
/// ## Purpose
/// Raised by the background scheduler once per period and broadcast through
/// the relay so an open popup can display it.
///
/// ## Contents
/// - `title`: Notification title.
/// - `body`: Fixed notification text.
#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct ReminderNotification {
    pub title: String,
    pub body: String,
}

/// Message sent to notify that a TCP connection has been closed.
///
/// ## Purpose
/// Lets the relay prune a disconnected peer, and lets the popup notice the
/// background context going away.
///
/// ## Contents
/// - `remote_addr`: The address of the remote peer whose connection closed.
#[derive(Serialize, Deserialize, Debug, Message, Clone)]
#[rtype(result = "()")]
pub struct ConnectionClosed {
    pub remote_addr: SocketAddr,
}

/// Message telling a sender actor to drop its stream and stop.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Shutdown;
