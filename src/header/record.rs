// src/header/record.rs
use crate::error::{PcapError, Result};
use crate::types::{Endianness, MagicVariant, Timestamp};

/// The 16-byte header preceding each captured record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Capture time, seconds since the Unix epoch.
    pub ts_secs: u32,
    /// Sub-second fraction: microseconds for classic captures,
    /// nanoseconds for nanosecond captures.
    pub ts_frac: u32,
    /// Bytes of the record stored in the file; the walker skips exactly
    /// this many payload bytes to reach the next header.
    pub captured_len: u32,
    /// Bytes of the record as seen on the wire. Not validated against
    /// `captured_len`; malformed files may invert the relation.
    pub original_len: u32,
}

impl RecordHeader {
    /// Size of a record header on disk.
    pub const LEN: usize = 16;

    /// Decode a record header in the byte order the global header
    /// announced.
    ///
    /// Fails with [`PcapError::TruncatedHeader`] when `buf` is shorter
    /// than the header; at a record boundary that is how a clean end of
    /// file presents itself to direct callers.
    pub fn decode(buf: &[u8], endianness: Endianness) -> Result<RecordHeader> {
        if buf.len() < Self::LEN {
            return Err(PcapError::TruncatedHeader {
                needed: Self::LEN,
                have: buf.len(),
            });
        }

        Ok(RecordHeader {
            ts_secs: endianness.read_u32(&buf[0..4]),
            ts_frac: endianness.read_u32(&buf[4..8]),
            captured_len: endianness.read_u32(&buf[8..12]),
            original_len: endianness.read_u32(&buf[12..16]),
        })
    }

    /// Capture time with the fraction normalized to nanoseconds.
    ///
    /// The fraction's unit is a property of the capture's magic variant,
    /// not of the record, so the variant picks the scaling here.
    pub fn timestamp(&self, magic: MagicVariant) -> Timestamp {
        match magic {
            MagicVariant::ClassicNanosecond => Timestamp::from_nanos(self.ts_secs, self.ts_frac),
            _ => Timestamp::from_micros(self.ts_secs, self.ts_frac),
        }
    }
}
