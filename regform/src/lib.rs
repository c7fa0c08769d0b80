//! # Regform
//!
//! A client-side registration form built on the regform unidirectional-data-
//! flow architecture: a single state value, a pure reducer driven by
//! dispatched actions, and a declarative view binder that derives props from
//! state and wraps interaction events into actions.
//!
//! This crate showcases:
//! - A pure state machine reducer ([`RegFormReducer`])
//! - Order-sensitive field validation ([`validate`])
//! - An asynchronous submit workflow ([`submit`]) orchestrating lifecycle
//!   actions around an injected external call ([`SubmitClient`])
//! - The view binder surface the rendering layer consumes
//!   ([`derive_props`], [`RegFormCallbacks`])
//!
//! ## Example
//!
//! ```no_run
//! use regform::{
//!     RegFormCallbacks, RegFormEnvironment, RegFormReducer, RegFormState, derive_props,
//!     mocks::MockSubmitClient,
//! };
//! use regform_core::environment::SystemClock;
//! use regform_runtime::Store;
//!
//! # async fn example() {
//! let client = MockSubmitClient::succeeding();
//! let env = RegFormEnvironment::new(SystemClock, client.clone());
//! let store = Store::new(RegFormState::default(), RegFormReducer::new(), env);
//! let callbacks = RegFormCallbacks::new(store.clone(), client);
//!
//! callbacks.on_first_name_change("Amy").await;
//! let props = derive_props(&store.state(Clone::clone).await);
//! assert_eq!(props.first_name, "Amy");
//!
//! callbacks.on_submit(&props).await;
//! # }
//! ```

pub mod actions;
pub mod binder;
pub mod environment;
pub mod mocks;
pub mod reducer;
pub mod state;
pub mod submit;
pub mod validation;

// Re-export commonly used types
pub use actions::RegFormAction;
pub use binder::{RegFormCallbacks, RegFormProps, derive_props};
pub use environment::{HttpSubmitClient, RegFormEnvironment, SubmitClient, SubmitError};
pub use reducer::RegFormReducer;
pub use state::{RegFormState, RegistrationFields};
pub use submit::{Dispatch, submit};
pub use validation::{MIN_PASSWORD_CHARS, ValidationError, validate};
