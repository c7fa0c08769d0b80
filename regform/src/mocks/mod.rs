//! Mock implementations for testing.
//!
//! Simple in-memory test doubles for the submit workflow's two seams:
//! the external submission call and the dispatcher.

#![allow(clippy::unwrap_used)] // Test doubles; mutex poison is unrecoverable

pub mod dispatcher;
pub mod submit_client;

pub use dispatcher::RecordingDispatcher;
pub use submit_client::MockSubmitClient;
