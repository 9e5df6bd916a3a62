//! Defines the data structures and models used throughout the application.
//!
//! This covers the parsed traffic history records and the sort orders the
//! user can pick for displaying them.

mod traffic;

pub use traffic::*;
