//! Error types shared by the mask engines and the CLI.

use thiserror::Error;

/// Everything that can go wrong while parsing, loading or emitting masks.
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("unknown mask token {token:?} in mask {mask:?}")]
    MalformedMask { mask: String, token: String },

    #[error("occurrence {value:?} for mask {mask:?} is not a non-negative integer")]
    MalformedOccurrence { mask: String, value: String },

    #[error("line {line}: expected 2 fields (mask,occurrence), found {fields}")]
    MalformedRecord { line: u64, fields: usize },

    #[error("complexity of mask {mask:?} overflows 128 bits")]
    ComplexityOverflow { mask: String },

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, MaskError>;
