// crates/cortools-core/src/error.rs

use thiserror::Error;

use crate::format::Label;

pub type Result<T> = std::result::Result<T, CorError>;

#[derive(Debug, Error)]
pub enum CorError {
    #[error("unsupported correction format (label {label})")]
    UnsupportedFormat { label: Label },

    #[error("truncated {what}: need {needed} bytes, have {available}")]
    Truncated {
        what: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("capture format error: {0}")]
    Capture(String),

    #[error("no correction samples found")]
    NoSamples,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
