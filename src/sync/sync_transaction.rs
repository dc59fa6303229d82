use chrono::{DateTime, TimeDelta, Utc};

/// A sync request and, once seen, the frame that answered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTransaction {
    pub job_id: u32,
    pub process_id: u32,
    pub request_frame_id: u32,
    pub response_frame_id: Option<u32>,
    pub request_timestamp: DateTime<Utc>,
}

impl SyncTransaction {
    pub fn new(job_id: u32, process_id: u32, frame_id: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            job_id,
            process_id,
            request_frame_id: frame_id,
            response_frame_id: None,
            request_timestamp: timestamp,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.response_frame_id.is_some()
    }

    /// Records the response frame. Only the first response is kept.
    ///
    /// Returns `false` if a response was already recorded.
    pub fn answer(&mut self, frame_id: u32) -> bool {
        if self.response_frame_id.is_some() {
            return false;
        }
        self.response_frame_id = Some(frame_id);
        true
    }

    pub fn elapsed_until(&self, timestamp: DateTime<Utc>) -> TimeDelta {
        timestamp.signed_duration_since(self.request_timestamp)
    }
}
