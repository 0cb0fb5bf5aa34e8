//! Shared terminal utilities.
//!
//! Box drawing, number and duration formatting, and styled messages.

mod output;

pub use output::*;
