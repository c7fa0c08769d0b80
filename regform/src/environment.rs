//! Registration form environment.
//!
//! All external dependencies are abstracted behind traits and injected via
//! [`RegFormEnvironment`], so the reducer and workflows stay deterministic
//! under test.

use crate::state::RegistrationFields;
use regform_core::environment::Clock;
use std::future::Future;
use thiserror::Error;

/// Failure of the external submission call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("submission failed: {0}")]
pub struct SubmitError(pub String);

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        Self(error.to_string())
    }
}

/// The opaque external submission call.
///
/// The contract consumed by the submit workflow is simply "resolves with
/// success or failure"; destination and transport details belong to the
/// implementation.
pub trait SubmitClient: Send + Sync {
    /// Submit the registration.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] if the request cannot be performed or the
    /// endpoint rejects it.
    fn submit(
        &self,
        fields: RegistrationFields,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// HTTP submission client.
///
/// Posts the registration as JSON to a caller-configured endpoint and treats
/// any non-2xx status as a failure.
#[derive(Debug, Clone)]
pub struct HttpSubmitClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitClient {
    /// Create a client posting to the given endpoint
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl SubmitClient for HttpSubmitClient {
    async fn submit(&self, fields: RegistrationFields) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&fields)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}

/// Registration form environment.
///
/// The clock is carried for parity with the architecture; the pure reducer
/// never reads it. The submit client is consumed by the submit workflow.
#[derive(Debug, Clone)]
pub struct RegFormEnvironment<C: Clock, T: SubmitClient> {
    /// Clock for time-based operations
    pub clock: C,
    /// The external submission call
    pub submit_client: T,
}

impl<C: Clock, T: SubmitClient> RegFormEnvironment<C, T> {
    /// Create a new environment from its dependencies
    #[must_use]
    pub const fn new(clock: C, submit_client: T) -> Self {
        Self {
            clock,
            submit_client,
        }
    }
}
