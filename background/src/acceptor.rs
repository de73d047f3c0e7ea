use crate::background_actors::relay::Relay;
use crate::messages::internal_messages::NewPeerConnection;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use std::net::SocketAddr;

/// Accepts popup connections on the background port and hands each stream
/// to the relay.
pub struct Acceptor {
    pub addr: SocketAddr,
    pub logger: Logger,
}

impl Acceptor {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            logger: Logger::new("Acceptor", Color::White),
        }
    }

    pub async fn run(&self, relay: Addr<Relay>) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        self.logger
            .info(format!("Listening for popups on {}", self.addr));
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    self.logger
                        .info(format!("Accepted connection from {}", peer_addr));
                    relay.do_send(NewPeerConnection { stream });
                }
                Err(e) => {
                    self.logger.warn(format!("Failed to accept connection: {}", e));
                }
            }
        }
    }
}
