//! Mock submission client for testing.

use crate::environment::{SubmitClient, SubmitError};
use crate::state::RegistrationFields;
use std::sync::{Arc, Mutex};

/// Mock submission client.
///
/// Programmable outcome, records every submission it receives so tests can
/// assert whether (and with what) the external call was made.
#[derive(Debug, Clone)]
pub struct MockSubmitClient {
    outcome: Result<(), SubmitError>,
    submissions: Arc<Mutex<Vec<RegistrationFields>>>,
}

impl MockSubmitClient {
    /// Client whose calls always succeed
    #[must_use]
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(()),
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Client whose calls always fail with the given message
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(SubmitError(message.into())),
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of calls received so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    /// All field values submitted so far, in call order
    #[must_use]
    pub fn submissions(&self) -> Vec<RegistrationFields> {
        self.submissions.lock().unwrap().clone()
    }
}

impl SubmitClient for MockSubmitClient {
    async fn submit(&self, fields: RegistrationFields) -> Result<(), SubmitError> {
        self.submissions.lock().unwrap().push(fields);
        self.outcome.clone()
    }
}
