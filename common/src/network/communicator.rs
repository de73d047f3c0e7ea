use crate::messages::network_messages::{NetworkMessage, Shutdown};
use crate::network::peer_types::PeerType;
use crate::network::tcp_receiver::TcpReceiver;
use crate::network::tcp_sender::TcpSender;
use actix::prelude::*;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::io::split;
use tokio::net::TcpStream;

/// Sender/receiver pair wrapping one TCP connection to a peer context.
/// Inbound messages land on `destination`; outbound ones go through `sender`.
pub struct Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub sender: Addr<TcpSender>,
    pub receiver: Addr<TcpReceiver<A>>,
    pub peer_type: PeerType,
    pub remote_addr: SocketAddr,
}

impl<A> Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub fn new(tcp_stream: TcpStream, destination: Addr<A>, peer_type: PeerType) -> Self {
        let remote_addr = tcp_stream
            .peer_addr()
            .unwrap_or_else(|_| SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)));
        let (read_half, write_half) = split(tcp_stream);
        Self {
            sender: TcpSender::new(write_half).start(),
            receiver: TcpReceiver::new(read_half, remote_addr, destination).start(),
            peer_type,
            remote_addr,
        }
    }

    pub fn send(&self, message: NetworkMessage) {
        self.sender.do_send(message);
    }

    pub fn shutdown(&self) {
        self.sender.do_send(Shutdown);
    }
}
