//! The asynchronous submit workflow.
//!
//! The workflow orchestrates a whole submission: it dispatches the lifecycle
//! actions ([`StartSubmit`](RegFormAction::StartSubmit) first, then exactly
//! one outcome action), runs validation, and performs the external call only
//! when validation passes. All state changes still go through the reducer;
//! the workflow itself never touches state.

use crate::actions::RegFormAction;
use crate::environment::{RegFormEnvironment, SubmitClient};
use crate::reducer::RegFormReducer;
use crate::state::{RegFormState, RegistrationFields};
use crate::validation::validate;
use regform_core::environment::Clock;
use regform_runtime::Store;
use std::future::Future;

/// The seam between the submit workflow and the store.
///
/// Production code dispatches through the [`Store`]; tests substitute a
/// recorder to assert on the dispatched action sequence.
pub trait Dispatch: Send + Sync {
    /// Dispatch an action toward the reducer
    fn dispatch(&self, action: RegFormAction) -> impl Future<Output = ()> + Send;
}

impl<C, T> Dispatch
    for Store<RegFormState, RegFormAction, RegFormEnvironment<C, T>, RegFormReducer<C, T>>
where
    C: Clock + Clone + Send + Sync + 'static,
    T: SubmitClient + Clone + Send + Sync + 'static,
{
    async fn dispatch(&self, action: RegFormAction) {
        // The only send failure is shutdown, at which point the form no
        // longer exists; there is nobody left to surface it to.
        if let Err(error) = self.send(action).await {
            tracing::warn!(%error, "dropped action");
        }
    }
}

/// Run one submission of the given field values.
///
/// 1. Dispatches `StartSubmit`.
/// 2. Validates; a validation failure dispatches `SubmitFailure` and
///    short-circuits without touching the external client.
/// 3. Otherwise performs the external call and dispatches `SubmitSuccess`
///    or `SubmitFailure` with the call's error.
///
/// Within one invocation `StartSubmit` is always dispatched and applied
/// before the outcome action. Overlapping submissions are not guarded
/// against here; the view is expected to honor `submit_enabled`.
#[tracing::instrument(skip_all)]
pub async fn submit<D, T>(dispatcher: &D, client: &T, fields: &RegistrationFields)
where
    D: Dispatch,
    T: SubmitClient,
{
    dispatcher.dispatch(RegFormAction::StartSubmit).await;

    if let Some(error) = validate(fields) {
        tracing::debug!(%error, "validation failed, skipping external call");
        dispatcher
            .dispatch(RegFormAction::SubmitFailure(error.to_string()))
            .await;
        return;
    }

    match client.submit(fields.clone()).await {
        Ok(()) => {
            tracing::debug!("submission accepted");
            dispatcher.dispatch(RegFormAction::SubmitSuccess).await;
        },
        Err(error) => {
            tracing::warn!(%error, "submission call failed");
            dispatcher
                .dispatch(RegFormAction::SubmitFailure(error.to_string()))
                .await;
        },
    }
}
