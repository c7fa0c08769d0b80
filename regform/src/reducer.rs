//! The registration form reducer.
//!
//! A pure state machine: every transition is O(1), total over the action
//! set, and returns no effects. The asynchronous parts of the system live in
//! the submit workflow, which feeds lifecycle actions into this reducer.

use crate::actions::RegFormAction;
use crate::environment::{RegFormEnvironment, SubmitClient};
use crate::state::RegFormState;
use regform_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};

/// Message prefix identifying errors that concern the first-name field.
const FIRST_NAME_ERROR_PREFIX: &str = "first";

/// Registration form reducer.
///
/// Generic over the environment's clock and submit client so it can run
/// against any [`RegFormEnvironment`]; being pure, it uses neither.
#[derive(Debug, Clone, Copy)]
pub struct RegFormReducer<C, T> {
    _phantom: std::marker::PhantomData<(C, T)>,
}

impl<C, T> RegFormReducer<C, T> {
    /// Create a new registration form reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C, T> Default for RegFormReducer<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, T: SubmitClient> Reducer for RegFormReducer<C, T> {
    type State = RegFormState;
    type Action = RegFormAction;
    type Environment = RegFormEnvironment<C, T>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            RegFormAction::SetFirstName(value) => {
                state.fields.first_name = value;

                // Field-level recovery affordance: a standing first-name
                // error is cleared as soon as the field is edited again.
                // TODO extend the same recovery to the other three fields,
                // keyed on their own message prefixes
                let concerns_first_name = state
                    .error
                    .as_deref()
                    .is_some_and(|message| message.starts_with(FIRST_NAME_ERROR_PREFIX));
                if concerns_first_name {
                    state.error = None;
                    state.submit_enabled = true;
                }
            },
            RegFormAction::SetLastName(value) => {
                state.fields.last_name = value;
            },
            RegFormAction::SetPassword(value) => {
                state.fields.password = value;
            },
            RegFormAction::SetConfirmPassword(value) => {
                state.fields.confirm_password = value;
            },
            RegFormAction::StartSubmit => {
                state.submit_enabled = false;
            },
            RegFormAction::SubmitSuccess => {
                state.submit_enabled = true;
            },
            RegFormAction::SubmitFailure(message) => {
                state.submit_enabled = false;
                state.error = Some(message);
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
