// src/reader/inspect.rs
//! One-shot queries over a capture file on disk.
//!
//! Every function opens its own handle and reads from offset zero, so
//! calls are independent and idempotent; nothing is cached between them.
//! Callers wanting several answers from one pass should drive a
//! [`RecordWalker`] themselves.

use crate::error::{PcapError, Result};
use crate::reader::walker::{RecordWalker, WalkResult, WalkStatus};
use crate::types::{DataLink, Endianness, MagicVariant, Timestamp};
use crate::utils::read_fully;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Classify the capture's magic number and byte order.
///
/// Reads only the first four bytes of the file. Unrecognized magics come
/// back as [`MagicVariant::Invalid`] rather than an error; a file shorter
/// than four bytes fails with [`PcapError::TruncatedHeader`].
pub fn classify(path: impl AsRef<Path>) -> Result<(MagicVariant, Endianness)> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 4];
    let n = read_fully(&mut file, &mut magic)?;
    if n < magic.len() {
        return Err(PcapError::TruncatedHeader {
            needed: magic.len(),
            have: n,
        });
    }
    Ok(MagicVariant::classify(magic))
}

/// True when the file begins with a classic pcap magic number.
///
/// A file too short to hold a magic number is simply not a pcap, so that
/// case is `Ok(false)` rather than a truncation error; real I/O failures
/// still propagate.
pub fn is_pcap(path: impl AsRef<Path>) -> Result<bool> {
    match classify(path) {
        Ok((variant, _)) => Ok(variant.is_supported()),
        Err(PcapError::TruncatedHeader { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Major and minor format version from the global header.
///
/// The pair is reported as stored; nothing pins it to the ubiquitous 2.4.
pub fn version(path: impl AsRef<Path>) -> Result<(u16, u16)> {
    let walker = RecordWalker::open(path)?;
    let header = walker.global_header();
    Ok((header.version_major, header.version_minor))
}

/// Link-layer type shared by every record in the capture.
pub fn data_link(path: impl AsRef<Path>) -> Result<DataLink> {
    let walker = RecordWalker::open(path)?;
    Ok(walker.global_header().datalink)
}

/// Timestamp of the first record.
///
/// Needs the global header plus a single record header, so it stays fast
/// on arbitrarily large files. Fails with [`PcapError::NoRecords`] on an
/// empty capture.
pub fn first_timestamp(path: impl AsRef<Path>) -> Result<Timestamp> {
    let mut walker = RecordWalker::open(path)?;
    let magic = walker.global_header().magic;
    match walker.next_record()? {
        Some(record) => Ok(record.timestamp(magic)),
        None => Err(PcapError::NoRecords),
    }
}

/// Timestamp of the last record; walks the whole capture to find it.
pub fn last_timestamp(path: impl AsRef<Path>) -> Result<Timestamp> {
    walk_complete(path)?.last.ok_or(PcapError::NoRecords)
}

/// Number of records in the capture.
///
/// Zero is a valid answer for a well-formed file with no records.
pub fn record_count(path: impl AsRef<Path>) -> Result<u32> {
    Ok(walk_complete(path)?.record_count)
}

/// Elapsed time between the first and last record.
///
/// Zero when exactly one record exists; fails with
/// [`PcapError::NoRecords`] when none do.
pub fn duration(path: impl AsRef<Path>) -> Result<Duration> {
    walk_complete(path)?.duration().ok_or(PcapError::NoRecords)
}

// A truncated file would yield a short count, so queries that depend on
// seeing every record refuse to answer from one.
fn walk_complete(path: impl AsRef<Path>) -> Result<WalkResult> {
    let result = RecordWalker::open(path)?.walk()?;
    match result.status {
        WalkStatus::Complete => Ok(result),
        WalkStatus::Truncated { needed, have } => {
            Err(PcapError::TruncatedHeader { needed, have })
        }
    }
}
