use crate::{error::DecodeError, sync::SyncTransaction};
use std::collections::BTreeMap;

/// Sync transactions of one connection, keyed by `(job_id, request frame)`.
#[derive(Debug, Default, Clone)]
pub struct SyncTable {
    transactions: BTreeMap<(u32, u32), SyncTransaction>,
}

impl SyncTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn insert(&mut self, transaction: SyncTransaction) {
        let key = (transaction.job_id, transaction.request_frame_id);
        self.transactions.insert(key, transaction);
    }

    pub fn get(&self, job_id: u32, request_frame_id: u32) -> Option<&SyncTransaction> {
        self.transactions.get(&(job_id, request_frame_id))
    }

    /// Finds the latest transaction at or before `(job_id, frame_id)`.
    ///
    /// The nearest key may belong to a lower job id; that candidate is
    /// reported as `TransactionMismatch` rather than returned.
    pub fn lookup(
        &mut self,
        job_id: u32,
        frame_id: u32,
    ) -> Result<Option<&mut SyncTransaction>, DecodeError> {
        match self.transactions.range_mut(..=(job_id, frame_id)).next_back() {
            Some((_, transaction)) if transaction.job_id == job_id => Ok(Some(transaction)),
            Some(_) => Err(DecodeError::TransactionMismatch),
            None => Ok(None),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyncTransaction> {
        self.transactions.values()
    }
}
