mod sync_matcher;
mod sync_table;
mod sync_transaction;

pub use sync_matcher::{SyncLink, SyncMatcher, SyncPacket, SyncRecord, SyncRole};
pub use sync_table::SyncTable;
pub use sync_transaction::SyncTransaction;
