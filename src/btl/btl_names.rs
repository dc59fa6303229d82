use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Transfer type in the base header's `type` byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum BtlSendType {
    Send = 1,
    Put = 2,
    Get = 3,
}

impl BtlSendType {
    pub fn name(self) -> &'static str {
        match self {
            BtlSendType::Send => "Send",
            BtlSendType::Put => "Put",
            BtlSendType::Get => "Get",
        }
    }

    pub fn name_of(raw: u8) -> String {
        match BtlSendType::try_from(raw) {
            Ok(t) => t.name().to_string(),
            Err(_) => format!("Unknown (0x{:02x})", raw),
        }
    }
}

/// Predefined communicator context ids.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum Communicator {
    World = 0,
    SelfComm = 1,
    Null = 2,
    Group = 3,
}

impl Communicator {
    pub fn name(self) -> &'static str {
        match self {
            Communicator::World => "MPI_COMM_WORLD",
            Communicator::SelfComm => "MPI_COMM_SELF",
            Communicator::Null => "MPI_COMM_NULL",
            Communicator::Group => "MPI_GROUP",
        }
    }

    pub fn label(ctx: u16) -> String {
        match Communicator::try_from(ctx) {
            Ok(c) => c.name().to_string(),
            Err(_) => format!("ctx={}", ctx),
        }
    }
}

/// Reserved (negative) message tags used by collective operations.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum CollectiveTag {
    Allgather = -10,
    Allgatherv = -11,
    Allreduce = -12,
    Alltoall = -13,
    Alltoallv = -14,
    Alltoallw = -15,
    Barrier = -16,
    Bcast = -17,
    Exscan = -18,
    Gather = -19,
    Gatherv = -20,
    Reduce = -21,
    ReduceScatter = -22,
    Scan = -23,
    Scatter = -24,
    Scatterv = -25,
    NonblockingBase = -26,
    NonblockingEnd = -32767,
    HcollBase = -32768,
    HcollEnd = -65535,
}

impl CollectiveTag {
    pub fn name(self) -> &'static str {
        match self {
            CollectiveTag::Allgather => "Allgather",
            CollectiveTag::Allgatherv => "Allgatherv",
            CollectiveTag::Allreduce => "AllReduce",
            CollectiveTag::Alltoall => "Alltoall",
            CollectiveTag::Alltoallv => "Alltoallv",
            CollectiveTag::Alltoallw => "Alltoallw",
            CollectiveTag::Barrier => "Barrier",
            CollectiveTag::Bcast => "Bcast",
            CollectiveTag::Exscan => "Exscan",
            CollectiveTag::Gather => "Gather",
            CollectiveTag::Gatherv => "Gatherv",
            CollectiveTag::Reduce => "Reduce",
            CollectiveTag::ReduceScatter => "Reduce_scatter",
            CollectiveTag::Scan => "Scan",
            CollectiveTag::Scatter => "Scatter",
            CollectiveTag::Scatterv => "Scatterv",
            CollectiveTag::NonblockingBase => "Nonblocking_base",
            CollectiveTag::NonblockingEnd => "Nonblocking_end",
            CollectiveTag::HcollBase => "Hcoll_base",
            CollectiveTag::HcollEnd => "Hcoll_end",
        }
    }

    /// Collective name for reserved tags, `Msg-Tag=N` for user tags.
    pub fn label(tag: i32) -> String {
        match CollectiveTag::try_from(tag) {
            Ok(t) => t.name().to_string(),
            Err(_) => format!("Msg-Tag={}", tag),
        }
    }
}
