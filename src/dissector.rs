mod decode_result;
mod dissector_config;
mod mpi_dissector;

pub use crate::error::DecodeError;
pub use decode_result::{DecodeResult, DecodedRecord};
pub use dissector_config::DissectorConfig;
pub use mpi_dissector::MpiDissector;
