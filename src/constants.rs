use std::ops::RangeInclusive;

// BTL framing
pub const BTL_BASE_HEADER_SIZE: usize = 8;
pub const BTL_COMMON_HEADER_SIZE: usize = 2;

/// Offset where the per-kind header begins (base + common header).
pub const BTL_KIND_HEADER_OFFSET: usize = BTL_BASE_HEADER_SIZE + BTL_COMMON_HEADER_SIZE;

// Minimum lengths, measured from the start of the per-kind header.
pub const MATCH_HEADER_SIZE: usize = 12;
pub const RNDV_MIN_SIZE: usize = 16;
/// Extension (`dst_request` + `restart_seq`) is only read if this many bytes remain.
pub const RNDV_EXTENSION_THRESHOLD: usize = 9;
pub const RGET_MIN_SIZE: usize = 12;
/// RendezvousGet precondition checked before the embedded rendezvous header.
pub const RGET_PREFIX_MIN_SIZE: usize = 28;
pub const FRAG_MIN_SIZE: usize = 24;
pub const FRAG_PADDED_SIZE: usize = 30;
pub const ACK_MIN_SIZE: usize = 24;
pub const ACK_PADDED_SIZE: usize = 30;
pub const RDMA_MIN_SIZE: usize = 52;
pub const RDMA_PADDED_SIZE: usize = 54;
pub const FIN_MIN_SIZE: usize = 12;
/// Bytes of `fail` + `descriptor` that close every FIN header.
pub const FIN_TAIL_SIZE: usize = 12;
pub const RNDV_RESTART_NOTIFY_MIN_SIZE: usize = 41;
/// Bytes of `restart_seq` through `process_id`.
pub const RNDV_RESTART_NOTIFY_TAIL_SIZE: usize = 29;
/// Remaining length after `restart_seq` that triggers the zero-padding test.
pub const RNDV_RESTART_NOTIFY_PADDING_THRESHOLD: usize = 31;

// OOB framing (always network byte order)
pub const OOB_HEADER_SIZE: usize = 28;

/// Both ports of an OOB connection lie in `[OOB_PORT_MIN, u16::MAX]`.
pub const OOB_PORT_MIN: u16 = 32768;

/// A sync handshake is exactly this long.
pub const SYNC_PACKET_SIZE: usize = 8;

/// TCP ports considered when no port set is configured.
pub const DEFAULT_PORTS: RangeInclusive<u16> = 1024..=65535;
