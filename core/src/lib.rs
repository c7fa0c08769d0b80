//! # Regform Core
//!
//! Core traits and types for the regform unidirectional-data-flow
//! architecture.
//!
//! The architecture is the usual functional-core / imperative-shell split:
//!
//! - **State**: domain state for a feature, owned data, `Clone`-able
//! - **Action**: all possible inputs to a reducer, a closed enum
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: side effect *descriptions*, executed by the runtime
//! - **Environment**: injected dependencies behind traits
//!
//! Reducers never perform I/O. Anything that touches the outside world is
//! returned as an [`effect::Effect`] value and executed by the `Store` in
//! `regform-runtime`, which feeds resulting actions back into the reducer.
//!
//! ## Example
//!
//! ```ignore
//! use regform_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for FormReducer {
//!     type State = FormState;
//!     type Action = FormAction;
//!     type Environment = FormEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut FormState,
//!         action: FormAction,
//!         env: &FormEnvironment,
//!     ) -> SmallVec<[Effect<FormAction>; 4]> {
//!         match action {
//!             FormAction::SetFirstName(value) => {
//!                 state.fields.first_name = value;
//!                 smallvec![Effect::None]
//!             }
//!             // ...
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types so reducers don't have to name the
// dependency themselves.
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - the core trait for business logic.
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic.
    ///
    /// # Type Parameters
    ///
    /// - `State`: the domain state this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer may consult
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// This must be a pure function: it updates `state` in place,
        /// consults `env` without performing I/O, and returns descriptions
        /// of any side effects for the runtime to execute.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions.
///
/// Effects are values, not execution. Reducers return them; the Store
/// runtime interprets them.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Describes a side effect to be executed by the runtime.
    ///
    /// Effects are NOT executed when constructed. The Store executes them
    /// after the reducer returns, and any action an effect produces is fed
    /// back into the reducer (the feedback loop).
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects concurrently
        Parallel(Vec<Effect<Action>>),

        /// Run effects in order, waiting for each to complete
        Sequential(Vec<Effect<Action>>),

        /// Dispatch an action after a delay
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after the delay
            action: Box<Action>,
        },

        /// Arbitrary async computation.
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back
        /// into the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap an async computation into a `Future` effect
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}

/// Environment module - dependency injection traits.
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter of the reducer (or the workflow functions that
/// sit next to it). Feature crates define their own domain traits; only the
/// universally useful ones live here.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Ping,
    }

    #[test]
    fn merge_builds_parallel() {
        let effect: Effect<TestAction> = Effect::merge(vec![Effect::None, Effect::None]);
        assert!(matches!(effect, Effect::Parallel(ref inner) if inner.len() == 2));
    }

    #[test]
    fn chain_builds_sequential() {
        let effect: Effect<TestAction> = Effect::chain(vec![Effect::None]);
        assert!(matches!(effect, Effect::Sequential(ref inner) if inner.len() == 1));
    }

    #[test]
    fn future_effect_resolves_to_action() {
        let effect = Effect::future(async { Some(TestAction::Ping) });
        let Effect::Future(fut) = effect else {
            unreachable!("Effect::future always builds a Future variant");
        };
        let action = tokio_test::block_on(fut);
        assert_eq!(action, Some(TestAction::Ping));
    }

    #[test]
    fn debug_formatting_is_stable() {
        let delay: Effect<TestAction> = Effect::Delay {
            duration: Duration::from_millis(5),
            action: Box::new(TestAction::Ping),
        };
        let formatted = format!("{delay:?}");
        assert!(formatted.contains("Effect::Delay"));

        let fut: Effect<TestAction> = Effect::future(async { None });
        assert_eq!(format!("{fut:?}"), "Effect::Future(<future>)");
    }
}
