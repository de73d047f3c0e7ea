pub mod network_messages;

pub use network_messages::*;
