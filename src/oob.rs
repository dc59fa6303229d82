mod oob_body;
mod oob_channel;
mod oob_data_types;
mod oob_frame_header;
mod oob_stream_decoder;
mod rml_tag;

pub use oob_body::{OobBody, OobBodyLayout, OobMessage};
pub use oob_channel::{ChannelDirection, OobChannel};
pub use oob_data_types::{DaemonCommand, IofType, OpalDataType, OrteDataType};
pub use oob_frame_header::OobFrameHeader;
pub use oob_stream_decoder::{OobPacket, OobSegment, OobStreamDecoder};
pub use rml_tag::{OobMsgType, RmlTag};
