//! Terminal input mapping
//!
//! Translates raw command lines into form events, keeping the parsing rules
//! out of the frontend loop.

pub mod commands;

pub use commands::{parse, Command, InputError};
