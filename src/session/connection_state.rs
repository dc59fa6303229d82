use crate::{oob::OobStreamDecoder, sync::SyncTable};

/// State kept for one connection across packets and passes.
#[derive(Debug, Default)]
pub struct ConnectionState {
    pub sync: SyncTable,

    /// Created by the first OOB packet that carries a whole frame header.
    pub oob: Option<OobStreamDecoder>,
}

impl ConnectionState {
    pub fn new() -> Self {
        Self::default()
    }
}
