//! Configuration module for pizza-form
//!
//! Concentrates the user-facing knobs of the form (name-length bounds and the
//! topping catalog) in one validated structure shared by the controller and
//! the renderer.

pub mod form;

pub use form::{FormConfig, FormConfigError};
