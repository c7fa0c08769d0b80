//! The view binder.
//!
//! Pure plumbing between the store and whatever renders the form:
//! [`derive_props`] projects state into display props, and
//! [`RegFormCallbacks`] wraps user-interaction events into dispatched
//! actions. No rendering happens here; the view layer consumes this
//! interface and re-renders whenever new props are derived.

use crate::actions::RegFormAction;
use crate::environment::SubmitClient;
use crate::state::{RegFormState, RegistrationFields};
use crate::submit::{Dispatch, submit};

/// Display props for the registration form view.
///
/// An identity-like projection of the whole state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegFormProps {
    /// First-name input value
    pub first_name: String,
    /// Last-name input value
    pub last_name: String,
    /// Password input value
    pub password: String,
    /// Password-confirmation input value
    pub confirm_password: String,
    /// Whether the submit control is actionable
    pub submit_enabled: bool,
    /// Error message to display, if any
    pub error: Option<String>,
}

impl RegFormProps {
    /// Recover the field values for submission
    #[must_use]
    pub fn fields(&self) -> RegistrationFields {
        RegistrationFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

/// Project the current state into view props
#[must_use]
pub fn derive_props(state: &RegFormState) -> RegFormProps {
    RegFormProps {
        first_name: state.fields.first_name.clone(),
        last_name: state.fields.last_name.clone(),
        password: state.fields.password.clone(),
        confirm_password: state.fields.confirm_password.clone(),
        submit_enabled: state.submit_enabled,
        error: state.error.clone(),
    }
}

/// User-interaction callbacks for the registration form view.
///
/// Closes over a dispatcher and the submit client; each callback wraps a
/// field-change event into the corresponding `Set*` action, and
/// [`on_submit`](Self::on_submit) runs the submit workflow with the current
/// field values.
#[derive(Debug, Clone)]
pub struct RegFormCallbacks<D, T> {
    dispatcher: D,
    client: T,
}

impl<D: Dispatch, T: SubmitClient> RegFormCallbacks<D, T> {
    /// Create callbacks over the given dispatcher and submit client
    #[must_use]
    pub const fn new(dispatcher: D, client: T) -> Self {
        Self { dispatcher, client }
    }

    /// The first-name input changed
    pub async fn on_first_name_change(&self, value: impl Into<String> + Send) {
        self.dispatcher
            .dispatch(RegFormAction::SetFirstName(value.into()))
            .await;
    }

    /// The last-name input changed
    pub async fn on_last_name_change(&self, value: impl Into<String> + Send) {
        self.dispatcher
            .dispatch(RegFormAction::SetLastName(value.into()))
            .await;
    }

    /// The password input changed
    pub async fn on_password_change(&self, value: impl Into<String> + Send) {
        self.dispatcher
            .dispatch(RegFormAction::SetPassword(value.into()))
            .await;
    }

    /// The password-confirmation input changed
    pub async fn on_confirm_password_change(&self, value: impl Into<String> + Send) {
        self.dispatcher
            .dispatch(RegFormAction::SetConfirmPassword(value.into()))
            .await;
    }

    /// The form was submitted with the field values currently on screen
    pub async fn on_submit(&self, props: &RegFormProps) {
        submit(&self.dispatcher, &self.client, &props.fields()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockSubmitClient, RecordingDispatcher};

    #[test]
    fn derive_props_projects_every_field() {
        let state = RegFormState {
            fields: RegistrationFields {
                first_name: "Amy".into(),
                last_name: "Pond".into(),
                password: "longenough1".into(),
                confirm_password: "longenough1".into(),
            },
            submit_enabled: false,
            error: Some("passwords must match".into()),
        };

        let props = derive_props(&state);
        assert_eq!(props.first_name, "Amy");
        assert_eq!(props.last_name, "Pond");
        assert_eq!(props.password, "longenough1");
        assert_eq!(props.confirm_password, "longenough1");
        assert!(!props.submit_enabled);
        assert_eq!(props.error.as_deref(), Some("passwords must match"));
        assert_eq!(props.fields(), state.fields);
    }

    #[tokio::test]
    async fn field_callbacks_wrap_values_into_set_actions() {
        let dispatcher = RecordingDispatcher::new();
        let callbacks =
            RegFormCallbacks::new(dispatcher.clone(), MockSubmitClient::succeeding());

        callbacks.on_first_name_change("Amy").await;
        callbacks.on_last_name_change("Pond").await;
        callbacks.on_password_change("longenough1").await;
        callbacks.on_confirm_password_change("longenough1").await;

        assert_eq!(
            dispatcher.actions(),
            vec![
                RegFormAction::SetFirstName("Amy".into()),
                RegFormAction::SetLastName("Pond".into()),
                RegFormAction::SetPassword("longenough1".into()),
                RegFormAction::SetConfirmPassword("longenough1".into()),
            ]
        );
    }

    #[tokio::test]
    async fn on_submit_runs_the_workflow_with_current_props() {
        let dispatcher = RecordingDispatcher::new();
        let client = MockSubmitClient::succeeding();
        let callbacks = RegFormCallbacks::new(dispatcher.clone(), client.clone());

        let props = derive_props(&RegFormState::default());
        callbacks.on_submit(&props).await;

        // Blank form: validation fails before any external call.
        assert_eq!(
            dispatcher.actions(),
            vec![
                RegFormAction::StartSubmit,
                RegFormAction::SubmitFailure("first name blank".into()),
            ]
        );
        assert_eq!(client.call_count(), 0);
    }
}
