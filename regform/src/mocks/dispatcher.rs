//! Recording dispatcher for testing.

use crate::actions::RegFormAction;
use crate::submit::Dispatch;
use std::sync::{Arc, Mutex};

/// Dispatcher that records every action instead of reducing it.
///
/// Lets tests assert on the exact dispatched action sequence of a workflow.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    actions: Arc<Mutex<Vec<RegFormAction>>>,
}

impl RecordingDispatcher {
    /// Create a new empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions dispatched so far, in order
    #[must_use]
    pub fn actions(&self) -> Vec<RegFormAction> {
        self.actions.lock().unwrap().clone()
    }
}

impl Dispatch for RecordingDispatcher {
    async fn dispatch(&self, action: RegFormAction) {
        self.actions.lock().unwrap().push(action);
    }
}
