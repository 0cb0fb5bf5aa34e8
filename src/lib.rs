//! Password mask analysis.
//!
//! Hashcat style masks (`?l?l?d?d`) are ranked from observed frequency
//! statistics, checked against those statistics, or enumerated from a
//! password policy. Every engine streams its masks into a [`MaskSink`] and
//! polls a stop flag between masks.

pub mod config;
pub mod engine;
pub mod error;
pub mod mask;
pub mod output;
pub mod policy;
pub mod table;
pub mod terminal;

pub use config::RunConfig;
pub use error::{MaskError, Result};
pub use mask::{CharClass, ClassCounts, Mask};
pub use output::MaskSink;
pub use policy::Policy;
pub use table::{Table, TableBuilder};
