//! One-shot focus notifications from the taskbar to window components.
//!
//! When the taskbar raises a window it publishes an event addressed to that
//! window so the window can pull the registry's geometry into its local
//! view state. Events are edge-triggered and consumed by their addressee;
//! a window that unmounts before consuming simply misses the signal.

use crate::model::WindowId;

const MAX_PENDING_EVENTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub window_id: WindowId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusChannel {
    pending: Vec<FocusEvent>,
}

impl FocusChannel {
    /// Queues a focus event for `window_id`, replacing any event still
    /// pending for the same window.
    pub fn publish(&mut self, window_id: WindowId) {
        self.pending.retain(|event| event.window_id != window_id);
        self.pending.push(FocusEvent { window_id });
        if self.pending.len() > MAX_PENDING_EVENTS {
            let overflow = self.pending.len() - MAX_PENDING_EVENTS;
            self.pending.drain(0..overflow);
        }
    }

    pub fn has_pending(&self, window_id: WindowId) -> bool {
        self.pending
            .iter()
            .any(|event| event.window_id == window_id)
    }

    /// Consumes and returns the pending event addressed to `window_id`, if
    /// any. Events addressed to other windows are left queued.
    pub fn take(&mut self, window_id: WindowId) -> Option<FocusEvent> {
        let index = self
            .pending
            .iter()
            .position(|event| event.window_id == window_id)?;
        Some(self.pending.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
