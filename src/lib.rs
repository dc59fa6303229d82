//! Decoder for the wire traffic of an MPI runtime: point-to-point BTL
//! headers, OOB control frames reassembled per connection, and the 8-byte
//! sync handshake.

pub mod btl;
pub mod classifier;
pub mod constants;
pub mod dissector;
pub mod error;
pub mod oob;
pub mod session;
pub mod sync;
pub mod wire;

pub use dissector::{DecodeResult, DecodedRecord, DissectorConfig, MpiDissector};
pub use error::DecodeError;
