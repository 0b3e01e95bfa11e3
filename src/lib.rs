// src/lib.rs
//! # pcapinfo-rs
//!
//! A lightweight Rust library for introspecting libpcap capture files:
//! format classification, record counts, time ranges and content digests,
//! without pulling in a full packet-capture stack.
//!
//! ## Features
//!
//! - 🔍 **Introspection Only**: magic, version, link type, record count,
//!   first/last timestamps and capture duration; payloads are never decoded
//! - 📦 **O(1) Memory**: records are enumerated by skipping payloads, so
//!   multi-gigabyte captures scan with two fixed-size header buffers
//! - 🔢 **All Four Classic Encodings**: big/little endian crossed with
//!   micro/nanosecond timestamp resolution, handled uniformly
//! - 🔒 **Content Digests**: streaming MD5/SHA-1/SHA-256 of the whole file
//!   for identity and transfer checks
//! - ⚡ **Optional mmap**: memory-mapped reads behind the `mmap` feature
//!
//! pcapng files are recognized and rejected with
//! [`PcapError::UnsupportedFormat`]; this library never parses them, and it
//! never writes or mutates captures.
//!
//! ## Quick Start
//!
//! ### Inspecting a capture
//!
//! ```rust,no_run
//! use pcapinfo_rs::*;
//!
//! fn main() -> Result<()> {
//!     let (variant, endianness) = classify("capture.pcap")?;
//!     println!("{} ({:?}-endian)", variant, endianness);
//!
//!     let (major, minor) = version("capture.pcap")?;
//!     println!("format v{}.{} on {}", major, minor, data_link("capture.pcap")?);
//!
//!     println!(
//!         "{} records spanning {:?}",
//!         record_count("capture.pcap")?,
//!         duration("capture.pcap")?
//!     );
//!
//!     println!("md5: {}", file_digest("capture.pcap", DigestAlgorithm::Md5)?);
//!     Ok(())
//! }
//! ```
//!
//! ### Walking records yourself
//!
//! ```rust,no_run
//! use pcapinfo_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut walker = RecordWalker::open("capture.pcap")?;
//!     while let Some(record) = walker.next_record()? {
//!         println!("{} of {} bytes captured", record.captured_len, record.original_len);
//!     }
//!     Ok(())
//! }
//! ```

// Modules
pub mod digest;
pub mod error;
pub mod header;
pub mod reader;
pub mod types;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{PcapError, Result};

// Type exports
pub use types::{DataLink, Endianness, MagicVariant, Timestamp};

// Header exports
pub use header::{GlobalHeader, RecordHeader};

// Reader exports
pub use reader::{
    classify, data_link, duration, first_timestamp, is_pcap, last_timestamp, record_count,
    version, ReadSeek, RecordWalker, WalkResult, WalkStatus,
};

// Digest exports
pub use digest::{file_digest, DigestAlgorithm};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use pcapinfo_rs::prelude::*;
    //! ```

    pub use crate::digest::{file_digest, DigestAlgorithm};
    pub use crate::error::{PcapError, Result};
    pub use crate::reader::{
        classify, data_link, duration, first_timestamp, is_pcap, last_timestamp, record_count,
        version, RecordWalker,
    };
    pub use crate::types::{DataLink, Endianness, MagicVariant, Timestamp};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
