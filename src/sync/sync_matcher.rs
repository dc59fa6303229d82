use crate::{
    btl::require,
    constants::SYNC_PACKET_SIZE,
    error::DecodeError,
    session::PacketContext,
    sync::{SyncTable, SyncTransaction},
    wire::{WireReader, WireWriter},
};
use chrono::TimeDelta;
use std::fmt;

/// The 8-byte sync handshake, always big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPacket {
    pub job_id: u32,
    pub process_id: u32,
}

impl SyncPacket {
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = WireReader::network(buf);
        require(&reader, SYNC_PACKET_SIZE)?;

        Ok(Self {
            job_id: reader.read_u32()?,
            process_id: reader.read_u32()?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        WireWriter::network()
            .u32(self.job_id)
            .u32(self.process_id)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRole {
    Request,
    Response,
}

impl fmt::Display for SyncRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncRole::Request => write!(f, "Request"),
            SyncRole::Response => write!(f, "Response"),
        }
    }
}

/// Cross reference from a sync packet to its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncLink {
    /// On a request: the frame that answered it.
    ResponseIn { response_frame: u32 },

    /// On a response: the frame it answers and the time since that request.
    ResponseTo { request_frame: u32, elapsed: TimeDelta },
}

/// Outcome of matching one sync packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRecord {
    pub packet: SyncPacket,
    pub role: SyncRole,
    pub link: Option<SyncLink>,

    /// Set when the nearest transaction belonged to another job.
    pub notice: Option<DecodeError>,
}

impl SyncRecord {
    pub fn summary(&self, src_port: u16, dst_port: u16) -> String {
        format!(
            "{}\u{2192}{} [SYNC] Jobid={} Vpid={} ({})",
            src_port, dst_port, self.packet.job_id, self.packet.process_id, self.role
        )
    }
}

/// Pairs sync requests with their responses within one connection.
///
/// The first sync packet of a connection is its request. Later packets are
/// matched against the latest transaction of the same job. Revisiting a
/// packet does not change the table; its role is derived again from the
/// stored transaction, which yields the role of the first pass.
pub struct SyncMatcher;

impl SyncMatcher {
    /// Matches one sync packet against the transactions of its connection.
    ///
    /// On a first visit the table may gain a transaction (the first sync
    /// packet of the connection) or have a response recorded against one.
    /// On a later visit the table is only read.
    ///
    /// # Arguments
    ///
    /// * `table` - Transactions of the connection the packet belongs to.
    /// * `buf` - The 8-byte sync packet.
    /// * `ctx` - Frame id, timestamp and visit flag of the packet.
    ///
    /// # Returns
    ///
    /// The packet's role and its link to the counterpart, if any. A nearest
    /// transaction from another job gives no link and a
    /// `DecodeError::TransactionMismatch` notice. Fails with
    /// `DecodeError::Truncated` when `buf` is shorter than 8 bytes.
    pub fn correlate(
        table: &mut SyncTable,
        buf: &[u8],
        ctx: &PacketContext,
    ) -> Result<SyncRecord, DecodeError> {
        let packet = SyncPacket::decode(buf)?;

        let record = if ctx.first_visit {
            Self::first_visit(table, packet, ctx)
        } else {
            Self::revisit(table, packet, ctx)
        };

        tracing::debug!(
            frame_id = ctx.frame_id,
            job_id = packet.job_id,
            process_id = packet.process_id,
            role = %record.role,
            linked = record.link.is_some(),
            "sync packet matched"
        );

        Ok(record)
    }

    fn first_visit(
        table: &mut SyncTable,
        packet: SyncPacket,
        ctx: &PacketContext,
    ) -> SyncRecord {
        if table.is_empty() {
            table.insert(SyncTransaction::new(
                packet.job_id,
                packet.process_id,
                ctx.frame_id,
                ctx.timestamp,
            ));
            return Self::unlinked(packet, SyncRole::Request, None);
        }

        match table.lookup(packet.job_id, ctx.frame_id) {
            Ok(Some(transaction)) if transaction.process_id == packet.process_id => {
                // Same sender as the request: a repeat of it.
                let link = transaction
                    .response_frame_id
                    .map(|response_frame| SyncLink::ResponseIn { response_frame });
                SyncRecord {
                    packet,
                    role: SyncRole::Request,
                    link,
                    notice: None,
                }
            }
            Ok(Some(transaction)) => {
                if !transaction.answer(ctx.frame_id) {
                    tracing::debug!(
                        request_frame = transaction.request_frame_id,
                        "sync request already answered"
                    );
                }
                SyncRecord {
                    packet,
                    role: SyncRole::Response,
                    link: Some(SyncLink::ResponseTo {
                        request_frame: transaction.request_frame_id,
                        elapsed: transaction.elapsed_until(ctx.timestamp),
                    }),
                    notice: None,
                }
            }
            Ok(None) => Self::unlinked(packet, SyncRole::Response, None),
            Err(err) => Self::unlinked(packet, SyncRole::Response, Some(err)),
        }
    }

    fn revisit(
        table: &mut SyncTable,
        packet: SyncPacket,
        ctx: &PacketContext,
    ) -> SyncRecord {
        let fallback_role = if table.is_empty() {
            SyncRole::Request
        } else {
            SyncRole::Response
        };

        match table.lookup(packet.job_id, ctx.frame_id) {
            Ok(Some(transaction)) if transaction.process_id == packet.process_id => SyncRecord {
                packet,
                role: SyncRole::Request,
                link: transaction
                    .response_frame_id
                    .map(|response_frame| SyncLink::ResponseIn { response_frame }),
                notice: None,
            },
            Ok(Some(transaction)) => SyncRecord {
                packet,
                role: SyncRole::Response,
                link: Some(SyncLink::ResponseTo {
                    request_frame: transaction.request_frame_id,
                    elapsed: transaction.elapsed_until(ctx.timestamp),
                }),
                notice: None,
            },
            Ok(None) => Self::unlinked(packet, fallback_role, None),
            Err(err) => Self::unlinked(packet, fallback_role, Some(err)),
        }
    }

    fn unlinked(
        packet: SyncPacket,
        role: SyncRole,
        notice: Option<DecodeError>,
    ) -> SyncRecord {
        SyncRecord {
            packet,
            role,
            link: None,
            notice,
        }
    }
}
