//! Application orchestration layer
//!
//! This module coordinates between input, domain, and UI layers.
//! It manages the form state machine and event handling.

pub mod controller;
pub mod state;

pub use controller::{FormController, SubmitOutcome};
pub use state::{FormEvent, FormPhase, FormState, StateEvent, StateMachine};
