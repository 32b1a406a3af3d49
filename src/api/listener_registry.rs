use crate::error::{AxisError, AxisResult};
use crate::extensions::AxisListener;

use super::AxisEngine;

impl AxisEngine {
    /// Registers a listener with unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn AxisListener>) -> AxisResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(AxisError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.contains_key(&listener_id) {
            return Err(AxisError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.insert(listener_id, listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.shift_remove(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.contains_key(listener_id)
    }
}
