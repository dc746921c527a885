//! Form rendering
//!
//! Builds a structured screen layout from a state snapshot and renders it to
//! plain text. Layout construction is separate from string rendering so
//! tests can assert on structure without scraping output.

pub mod view;

pub use view::FormScreen;
