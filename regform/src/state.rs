//! Registration form state types.
//!
//! All types are `Clone` to support the functional architecture pattern.

use serde::{Deserialize, Serialize};

/// The four user-editable text fields of the registration form.
///
/// This is the unit handed to validation and to the submission client, so it
/// exists independently of the rest of the form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationFields {
    /// First name as currently typed
    pub first_name: String,
    /// Last name as currently typed
    pub last_name: String,
    /// Password as currently typed
    pub password: String,
    /// Password confirmation as currently typed
    pub confirm_password: String,
}

/// Root registration form state.
///
/// One value of this type is current per store; every dispatched action
/// produces the next value through the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegFormState {
    /// The editable fields
    pub fields: RegistrationFields,
    /// Whether the submit control is currently actionable.
    ///
    /// `false` only while a submission is in flight or after a failure.
    pub submit_enabled: bool,
    /// Current validation/submission error message, if any.
    ///
    /// Set only by `SubmitFailure`; cleared by the first-name recovery
    /// affordance in the reducer.
    pub error: Option<String>,
}

impl Default for RegFormState {
    /// The explicit initial state: all fields empty, submit enabled,
    /// no error.
    fn default() -> Self {
        Self {
            fields: RegistrationFields::default(),
            submit_enabled: true,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_and_submittable() {
        let state = RegFormState::default();
        assert_eq!(state.fields.first_name, "");
        assert_eq!(state.fields.last_name, "");
        assert_eq!(state.fields.password, "");
        assert_eq!(state.fields.confirm_password, "");
        assert!(state.submit_enabled);
        assert_eq!(state.error, None);
    }
}
