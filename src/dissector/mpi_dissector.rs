use crate::{
    btl::BtlCodec,
    classifier::{PacketClass, PacketClassifier},
    constants::OOB_HEADER_SIZE,
    dissector::{DecodeResult, DecodedRecord, DissectorConfig},
    error::DecodeError,
    oob::{ChannelDirection, OobStreamDecoder},
    session::{ConnectionKey, ConnectionState, PacketContext, SessionStore},
    sync::SyncMatcher,
};

/// Classify-and-decode entry point.
///
/// Holds only configuration. Connection state is passed in by the caller,
/// either directly or through a `SessionStore`.
#[derive(Debug, Clone, Default)]
pub struct MpiDissector {
    config: DissectorConfig,
    classifier: PacketClassifier,
}

impl MpiDissector {
    pub fn new(config: DissectorConfig) -> Self {
        let classifier = PacketClassifier::new(config.ports.clone());
        Self { config, classifier }
    }

    pub fn config(&self) -> &DissectorConfig {
        &self.config
    }

    pub fn classify(&self, buf: &[u8], ctx: &PacketContext) -> PacketClass {
        self.classifier.classify(buf, ctx.src_port, ctx.dst_port)
    }

    /// Decodes a packet of the connection identified by `key`.
    ///
    /// Packets that are rejected leave the store untouched.
    pub fn dissect(
        &self,
        sessions: &mut SessionStore,
        key: ConnectionKey,
        buf: &[u8],
        ctx: &PacketContext,
    ) -> Result<DecodeResult, DecodeError> {
        let class = self.classify(buf, ctx);
        Self::admit(class, sessions.get(&key), buf)?;

        let state = sessions.get_or_create(key);
        self.decode_class(class, buf, ctx, state)
    }

    /// Decodes a packet against an existing connection state.
    pub fn decode(
        &self,
        buf: &[u8],
        ctx: &PacketContext,
        state: &mut ConnectionState,
    ) -> Result<DecodeResult, DecodeError> {
        let class = self.classify(buf, ctx);
        Self::admit(class, Some(&*state), buf)?;

        self.decode_class(class, buf, ctx, state)
    }

    // Rejections that must happen before any state is created.
    fn admit(
        class: PacketClass,
        state: Option<&ConnectionState>,
        buf: &[u8],
    ) -> Result<(), DecodeError> {
        match class {
            PacketClass::NotRecognized => Err(DecodeError::NotRecognized),
            PacketClass::Oob
                if state.is_none_or(|state| state.oob.is_none())
                    && buf.len() < OOB_HEADER_SIZE =>
            {
                tracing::warn!(len = buf.len(), "oob conversation starts without a full header");
                Err(DecodeError::Truncated {
                    needed: OOB_HEADER_SIZE,
                    available: buf.len(),
                })
            }
            _ => Ok(()),
        }
    }

    fn decode_class(
        &self,
        class: PacketClass,
        buf: &[u8],
        ctx: &PacketContext,
        state: &mut ConnectionState,
    ) -> Result<DecodeResult, DecodeError> {
        match class {
            PacketClass::Oob => {
                let direction = ChannelDirection::from_ports(ctx.src_port, ctx.dst_port);
                let decoder = state.oob.get_or_insert_with(OobStreamDecoder::new);
                let packet = decoder.decode(buf, ctx.frame_id, direction, ctx.first_visit)?;

                Ok(DecodeResult {
                    bytes_consumed: packet.bytes_consumed,
                    summary: packet.summary(ctx.src_port, ctx.dst_port),
                    record: DecodedRecord::Oob(packet),
                    notice: None,
                })
            }
            PacketClass::Sync => {
                let record = SyncMatcher::correlate(&mut state.sync, buf, ctx)?;

                Ok(DecodeResult {
                    bytes_consumed: buf.len(),
                    summary: record.summary(ctx.src_port, ctx.dst_port),
                    notice: record.notice.clone(),
                    record: DecodedRecord::Sync(record),
                })
            }
            PacketClass::Btl(_) => {
                let packet = BtlCodec::decode(buf, self.config.endianness)?;

                Ok(DecodeResult {
                    bytes_consumed: packet.header_len,
                    summary: packet.summary(ctx.src_port, ctx.dst_port),
                    notice: packet.notice.clone(),
                    record: DecodedRecord::Btl(packet),
                })
            }
            PacketClass::NotRecognized => Err(DecodeError::NotRecognized),
        }
    }
}
