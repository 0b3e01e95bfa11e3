// src/digest.rs
//! Whole-file content digests.
//!
//! Digests identify a capture (dedup, chain-of-custody, transfer checks)
//! and are deliberately decoupled from format validation: any readable
//! file digests fine, pcap or not. Files are streamed through the hash in
//! chunks, never loaded whole.

use crate::error::Result;
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Hash primitive used for [`file_digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Stream the whole file at `path` through `algorithm` and return the
/// digest as lowercase hex.
pub fn file_digest(path: impl AsRef<Path>, algorithm: DigestAlgorithm) -> Result<String> {
    let mut file = File::open(path)?;
    match algorithm {
        DigestAlgorithm::Md5 => digest_reader::<Md5>(&mut file),
        DigestAlgorithm::Sha1 => digest_reader::<Sha1>(&mut file),
        DigestAlgorithm::Sha256 => digest_reader::<Sha256>(&mut file),
    }
}

// The hash states implement io::Write, so io::copy does the chunked
// feeding with its own stack buffer.
fn digest_reader<D: Digest + Write>(reader: &mut impl Read) -> Result<String> {
    let mut hasher = D::new();
    io::copy(reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
