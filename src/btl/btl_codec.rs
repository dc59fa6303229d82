use crate::{
    btl::{
        AckHeader, BaseHeader, BtlKind, CommonHeader, DecodedHeader, FinHeader, FragmentHeader,
        MatchHeader, RdmaHeader, RendezvousGetHeader, RendezvousHeader,
        RendezvousRestartNotifyHeader,
    },
    constants::BTL_KIND_HEADER_OFFSET,
    error::DecodeError,
    wire::{Endianness, WireReader},
};
use std::ops::Range;

/// A decoded BTL packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtlPacket {
    pub base: BaseHeader,
    pub common: CommonHeader,
    pub header: DecodedHeader,

    /// Bytes covered by the base, common and per-kind headers.
    pub header_len: usize,

    /// Application data after the headers. Never decoded.
    pub payload: Range<usize>,

    /// Why the per-kind header is missing, if it is.
    pub notice: Option<DecodeError>,
}

impl BtlPacket {
    pub fn kind(&self) -> BtlKind {
        self.base.kind
    }

    /// One-line description in the form `src→dst [KIND] fields`.
    pub fn summary(&self, src_port: u16, dst_port: u16) -> String {
        let mut line = format!("{}\u{2192}{} [{}]", src_port, dst_port, self.base.kind);

        let fields = self.header.to_string();
        if !fields.is_empty() {
            line.push(' ');
            line.push_str(&fields);
        }

        match &self.notice {
            Some(DecodeError::Unimplemented(_)) => line.push_str(" not implemented yet"),
            Some(DecodeError::Truncated { .. }) => line.push_str(" (truncated)"),
            _ => {}
        }

        line
    }
}

/// Decodes BTL packets: base and common header first, then the per-kind header
/// selected by the base tag.
pub struct BtlCodec;

impl BtlCodec {
    /// Decodes a whole BTL packet.
    ///
    /// Fails only when the buffer is not a BTL packet at all. A per-kind header
    /// that cannot be decoded leaves `header` as `BaseCommon` and records the
    /// reason in `notice`; its bytes are then reported as payload.
    pub fn decode(buf: &[u8], endianness: Endianness) -> Result<BtlPacket, DecodeError> {
        if buf.len() < BTL_KIND_HEADER_OFFSET {
            return Err(DecodeError::NotRecognized);
        }

        let mut reader = WireReader::new(buf, endianness);
        let base = BaseHeader::decode(&mut reader)?;
        let common = CommonHeader::decode(&mut reader)?;

        let (header, notice) = match Self::decode_kind(base.kind, &mut reader) {
            Ok(header) => (header, None),
            Err(err) => {
                tracing::debug!(kind = %base.kind, %err, "btl header not decoded");
                (DecodedHeader::BaseCommon, Some(err))
            }
        };

        let header_len = reader.position();

        Ok(BtlPacket {
            base,
            common,
            header,
            header_len,
            payload: header_len..buf.len(),
            notice,
        })
    }

    /// Decodes the per-kind header at the reader's position.
    ///
    /// The reader must sit just past the common header. Each kind checks its
    /// minimum length first and then applies its padding rules, which depend
    /// only on how many bytes remain in the buffer.
    ///
    /// # Arguments
    ///
    /// * `kind` - The tag from the base header.
    /// * `reader` - Cursor positioned at the per-kind header.
    ///
    /// # Returns
    ///
    /// The decoded header, with the reader advanced past it. Returns
    /// `DecodeError::Truncated` when the remaining bytes are below the kind's
    /// minimum and `DecodeError::Unimplemented` for kinds that have no
    /// decoder. On error the reader is not advanced.
    pub fn decode_kind(
        kind: BtlKind,
        reader: &mut WireReader<'_>,
    ) -> Result<DecodedHeader, DecodeError> {
        tracing::trace!(%kind, remaining = reader.remaining(), "decoding btl header");

        if !kind.is_implemented() {
            return Err(DecodeError::Unimplemented(kind));
        }

        match kind {
            BtlKind::Match => MatchHeader::decode(reader).map(DecodedHeader::Match),
            BtlKind::Rendezvous => RendezvousHeader::decode(reader).map(DecodedHeader::Rendezvous),
            BtlKind::RendezvousGet => {
                RendezvousGetHeader::decode(reader).map(DecodedHeader::RendezvousGet)
            }
            BtlKind::Fragment => FragmentHeader::decode(reader).map(DecodedHeader::Fragment),
            BtlKind::Ack => AckHeader::decode(reader).map(DecodedHeader::Ack),
            BtlKind::Put => RdmaHeader::decode(reader).map(DecodedHeader::Rdma),
            BtlKind::Fin => FinHeader::decode(reader).map(DecodedHeader::Fin),
            BtlKind::RendezvousRestartNotify => {
                RendezvousRestartNotifyHeader::decode(reader)
                    .map(DecodedHeader::RendezvousRestartNotify)
            }
            _ => Err(DecodeError::Unimplemented(kind)),
        }
    }

    /// Encodes the recognized fields of a match header.
    pub fn encode_match(header: &MatchHeader, endianness: Endianness) -> Vec<u8> {
        header.encode(endianness)
    }
}
