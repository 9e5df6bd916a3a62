//! Reads the router traffic history file and turns it into records.
//!
//! The `parser` submodule handles both the per-line format and the file-level
//! checks performed before parsing.

mod parser;

pub use parser::*;
