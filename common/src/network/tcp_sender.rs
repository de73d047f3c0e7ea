use crate::messages::network_messages::{NetworkMessage, Shutdown};
use actix::prelude::*;
use std::collections::VecDeque;
use tokio::io::{AsyncWriteExt, BufWriter, WriteHalf};
use tokio::net::TcpStream;

/// The `TcpSender` actor serializes [`NetworkMessage`]s and writes them to a
/// TCP stream, one JSON value per line. A queue keeps the send order.
pub struct TcpSender {
    /// The buffered writer for the TCP stream. `None` after a write error.
    pub writer: Option<BufWriter<WriteHalf<TcpStream>>>,
    /// Messages waiting to go out.
    pub queue: VecDeque<NetworkMessage>,
}

impl TcpSender {
    pub fn new(write_half: WriteHalf<TcpStream>) -> Self {
        Self {
            writer: Some(BufWriter::new(write_half)),
            queue: VecDeque::new(),
        }
    }
}

impl Actor for TcpSender {
    type Context = Context<Self>;
}

struct ProcessQueue;

impl Message for ProcessQueue {
    type Result = ();
}

impl Handler<NetworkMessage> for TcpSender {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) {
        self.queue.push_back(msg);
        if self.queue.len() == 1 {
            ctx.notify(ProcessQueue);
        }
    }
}

impl Handler<ProcessQueue> for TcpSender {
    type Result = ResponseActFuture<Self, ()>;

    fn handle(&mut self, _msg: ProcessQueue, _ctx: &mut Self::Context) -> Self::Result {
        let msg = match self.queue.front().cloned() {
            Some(msg) => msg,
            None => return Box::pin(async {}.into_actor(self)),
        };
        let mut writer = match self.writer.take() {
            Some(writer) => writer,
            None => return Box::pin(async {}.into_actor(self)),
        };

        let fut = async move {
            let serialized = match serde_json::to_string(&msg) {
                Ok(s) => s,
                Err(e) => return Err(format!("Error serializing message: {:?}", e)),
            };

            if let Err(e) = writer.write_all(serialized.as_bytes()).await {
                return Err(format!("Error writing to socket: {:?}", e));
            }
            if let Err(e) = writer.write_all(b"\n").await {
                return Err(format!("Error writing to socket: {:?}", e));
            }
            if let Err(e) = writer.flush().await {
                return Err(format!("Error flushing socket: {:?}", e));
            }

            Ok(writer)
        };

        Box::pin(fut.into_actor(self).map(move |res, act, ctx| match res {
            Ok(writer) => {
                act.writer = Some(writer);
                act.queue.pop_front();
                if !act.queue.is_empty() {
                    ctx.notify(ProcessQueue);
                }
            }
            Err(err_msg) => {
                // El stream quedó inutilizable; descartamos la cola entera.
                act.writer = None;
                act.queue.clear();
                eprintln!("[TcpSender] {}", err_msg);
            }
        }))
    }
}

impl Handler<Shutdown> for TcpSender {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) {
        self.writer = None;
        self.queue.clear();
        ctx.stop();
    }
}
