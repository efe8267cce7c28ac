//! Single-slot mailbox with take-once semantics.

use serde::{Deserialize, Serialize};

/// Holds at most one value until it is taken.
///
/// Posting over an occupied slot replaces the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Remove and return the value. A second call returns `None`.
    pub fn try_take(&mut self) -> Option<T> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
