mod packet_class;
mod packet_classifier;
mod port_set;

pub use packet_class::PacketClass;
pub use packet_classifier::PacketClassifier;
pub use port_set::{PortSet, PortSetParseError};
