mod connection_key;
mod connection_state;
mod packet_context;
mod session_store;

pub use connection_key::{ConnectionKey, Transport};
pub use connection_state::ConnectionState;
pub use packet_context::PacketContext;
pub use session_store::SessionStore;
