// src/header/global.rs
use crate::error::{PcapError, Result};
use crate::types::{DataLink, Endianness, MagicVariant};

/// Decoded form of the 24-byte global header at the start of a capture.
///
/// The version and link-layer fields are only meaningful when `magic` is
/// one of the classic variants; for pcapng or unrecognized magic they hold
/// whatever bytes happened to be there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalHeader {
    pub magic: MagicVariant,
    pub endianness: Endianness,
    pub version_major: u16,
    pub version_minor: u16,
    pub datalink: DataLink,
}

impl GlobalHeader {
    /// Size of the global header on disk.
    pub const LEN: usize = 24;

    /// Decode a global header from the first [`GlobalHeader::LEN`] bytes
    /// of a file.
    ///
    /// The magic number is classified first and the remaining fields are
    /// read in whichever byte order it announces. Fails with
    /// [`PcapError::TruncatedHeader`] when `buf` is shorter than the
    /// header.
    pub fn decode(buf: &[u8]) -> Result<GlobalHeader> {
        if buf.len() < Self::LEN {
            return Err(PcapError::TruncatedHeader {
                needed: Self::LEN,
                have: buf.len(),
            });
        }

        let (magic, endianness) = MagicVariant::classify([buf[0], buf[1], buf[2], buf[3]]);

        Ok(GlobalHeader {
            magic,
            endianness,
            version_major: endianness.read_u16(&buf[4..6]),
            version_minor: endianness.read_u16(&buf[6..8]),
            // bytes 8..20 hold thiszone, sigfigs and snaplen; not consumed
            datalink: DataLink(endianness.read_u32(&buf[20..24])),
        })
    }
}
