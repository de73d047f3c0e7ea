use actix::prelude::*;
use common::messages::network_messages::NetworkMessage;
use tokio::net::TcpStream;

/// Message handing a newly accepted connection to the relay.
///
/// ## Purpose
/// Sent by the acceptor loop for every popup (or other local context) that
/// connects to the background port.
///
/// ## Contents
/// - `stream`: The accepted TCP stream.
#[derive(Message)]
#[rtype(result = "()")]
pub struct NewPeerConnection {
    pub stream: TcpStream,
}

/// Message asking the relay to broadcast to every connected peer.
///
/// ## Purpose
/// Used by the reminder scheduler to push its notification through the same
/// at-most-once path selections take.
///
/// ## Contents
/// - `message`: The network message to fan out.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Broadcast {
    pub message: NetworkMessage,
}

/// Message querying how many peers are currently connected.
#[derive(Message, Debug, Clone)]
#[rtype(result = "usize")]
pub struct GetPeerCount;
