use std::net::SocketAddr;
use tokio::net::TcpStream;

/// Tries to connect to the given address, yielding `None` when the peer
/// context is not running. Callers decide whether that is fatal.
pub async fn connect(server_addr: SocketAddr) -> Option<TcpStream> {
    match TcpStream::connect(server_addr).await {
        Ok(stream) => Some(stream),
        Err(_) => None,
    }
}
