//! Registration form actions.
//!
//! Actions are the closed set of inputs to the reducer: user intent from the
//! view binder plus the submission lifecycle transitions produced by the
//! submit workflow. They are ephemeral values, constructed once and consumed
//! exactly once by the reducer.

use serde::{Deserialize, Serialize};

/// Everything that can happen to the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegFormAction {
    /// The first-name input changed
    SetFirstName(String),
    /// The last-name input changed
    SetLastName(String),
    /// The password input changed
    SetPassword(String),
    /// The password-confirmation input changed
    SetConfirmPassword(String),
    /// A submission started; disables the submit control
    StartSubmit,
    /// The external submission call succeeded
    SubmitSuccess,
    /// Validation or the external call failed, with the message to display
    SubmitFailure(String),
}
