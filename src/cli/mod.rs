//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the argument definition, the `App` pipeline that ties loading,
//! sorting and rendering together, the interactive sort prompt, and the
//! table renderer.

mod commands;
pub mod prompt;
pub mod table;

pub use commands::*;
