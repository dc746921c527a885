//! Reactive pizza order form for the terminal
//!
//! The crate is split into layers: pure domain logic (order record,
//! validation, confirmation text), an application controller that reacts to
//! form events, a command parser for terminal input, and a text renderer.
//! Validation is decoupled from rendering so the same core works under any
//! frontend.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;
