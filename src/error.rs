// src/error.rs
use std::io;
use thiserror::Error;

use crate::types::MagicVariant;

#[derive(Error, Debug)]
pub enum PcapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fewer bytes were available than a fixed-size header requires.
    ///
    /// During a record walk this is the signal for a partially written
    /// file; a clean end of file at a record boundary is not an error.
    #[error("truncated header: need {needed} bytes, have {have}")]
    TruncatedHeader { needed: usize, have: usize },

    /// The magic number is either unrecognized or belongs to a container
    /// this crate deliberately does not parse (pcapng).
    #[error("unsupported capture format: {variant} (magic {magic:#010x})")]
    UnsupportedFormat { variant: MagicVariant, magic: u32 },

    /// The capture is structurally valid but holds no records, and the
    /// requested operation needs at least one.
    #[error("capture contains no records")]
    NoRecords,
}

pub type Result<T> = std::result::Result<T, PcapError>;
