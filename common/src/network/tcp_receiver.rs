use crate::messages::network_messages::{ConnectionClosed, NetworkMessage};
use actix::dev::ToEnvelope;
use actix::prelude::*;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, BufReader, ReadHalf};
use tokio::net::TcpStream;

/// The `TcpReceiver` actor reads line-delimited JSON from a TCP stream and
/// forwards each decoded [`NetworkMessage`] to its destination actor. When
/// the stream ends it reports a [`ConnectionClosed`] and stops.
pub struct TcpReceiver<A: Actor + Handler<NetworkMessage>> {
    remote_addr: SocketAddr,
    reader: Option<BufReader<ReadHalf<TcpStream>>>,
    destination: Addr<A>,
}

impl<A> TcpReceiver<A>
where
    A: Actor + Handler<NetworkMessage>,
{
    pub fn new(reader: ReadHalf<TcpStream>, remote_addr: SocketAddr, destination: Addr<A>) -> Self {
        Self {
            remote_addr,
            reader: Some(BufReader::new(reader)),
            destination,
        }
    }
}

impl<A> Actor for TcpReceiver<A>
where
    A: Actor + Handler<NetworkMessage> + 'static,
    A::Context: ToEnvelope<A, NetworkMessage>,
{
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let destination = self.destination.clone();
        let remote_addr = self.remote_addr;
        let reader = match self.reader.take() {
            Some(reader) => reader,
            None => return,
        };

        ctx.spawn(
            async move {
                let mut lines = reader.lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    match serde_json::from_str::<NetworkMessage>(&line) {
                        Ok(msg) => destination.do_send(msg),
                        Err(e) => {
                            // Un mensaje malformado no corta la conexión.
                            eprintln!("[TcpReceiver] Undecodable line from {}: {}", remote_addr, e);
                        }
                    }
                }
                destination.do_send(NetworkMessage::ConnectionClosed(ConnectionClosed {
                    remote_addr,
                }));
            }
            .into_actor(self)
            .map(|_, _act, ctx| ctx.stop()),
        );
    }
}
