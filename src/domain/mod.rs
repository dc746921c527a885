//! Domain logic and core data structures
//!
//! This module contains pure business logic that is independent
//! of terminal I/O and rendering concerns.

pub mod catalog;
pub mod confirmation;
pub mod order;
pub mod validation;
