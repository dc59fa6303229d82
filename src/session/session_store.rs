use crate::session::{ConnectionKey, ConnectionState};
use std::collections::HashMap;

/// Owns the state of every connection seen in a capture session.
#[derive(Debug, Default)]
pub struct SessionStore {
    connections: HashMap<ConnectionKey, ConnectionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, key: ConnectionKey) -> &mut ConnectionState {
        self.connections.entry(key).or_insert_with(|| {
            tracing::trace!(?key, "new connection state");
            ConnectionState::new()
        })
    }

    pub fn get(&self, key: &ConnectionKey) -> Option<&ConnectionState> {
        self.connections.get(key)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Drops all connection state, as when a capture is closed.
    pub fn clear(&mut self) {
        self.connections.clear();
    }
}
