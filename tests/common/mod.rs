// tests/common/mod.rs
//! Synthetic capture files for the integration tests.
//!
//! Fixtures are built byte by byte so each test controls exactly what is
//! on disk, including deliberately damaged files.
#![allow(dead_code)]

use pcapinfo_rs::{Endianness, MagicVariant};
use std::io::Write;
use tempfile::NamedTempFile;

pub const TEST_SNAPLEN: u32 = 65535;

/// Builds classic pcap bytes in either byte order and either timestamp
/// resolution.
pub struct PcapBuilder {
    endianness: Endianness,
    nanosecond: bool,
    datalink: u32,
    body: Vec<u8>,
}

impl PcapBuilder {
    pub fn new(endianness: Endianness) -> Self {
        PcapBuilder {
            endianness,
            nanosecond: false,
            datalink: 1,
            body: Vec::new(),
        }
    }

    /// Use the nanosecond-resolution magic number.
    pub fn nanosecond(mut self) -> Self {
        self.nanosecond = true;
        self
    }

    pub fn datalink(mut self, code: u32) -> Self {
        self.datalink = code;
        self
    }

    /// Append a well-formed record whose captured and original lengths
    /// both equal the payload length.
    pub fn record(self, ts_secs: u32, ts_frac: u32, payload: &[u8]) -> Self {
        let len = payload.len() as u32;
        self.record_raw(ts_secs, ts_frac, len, len, payload)
    }

    /// Append a record with explicit length fields, which may disagree
    /// with the actual payload to simulate damage.
    pub fn record_raw(
        mut self,
        ts_secs: u32,
        ts_frac: u32,
        captured_len: u32,
        original_len: u32,
        payload: &[u8],
    ) -> Self {
        let mut header = Vec::with_capacity(16);
        self.put_u32(&mut header, ts_secs);
        self.put_u32(&mut header, ts_frac);
        self.put_u32(&mut header, captured_len);
        self.put_u32(&mut header, original_len);
        self.body.extend_from_slice(&header);
        self.body.extend_from_slice(payload);
        self
    }

    /// Append raw bytes verbatim, e.g. a partial record header.
    pub fn raw_bytes(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let magic = if self.nanosecond {
            MagicVariant::MAGIC_NANOS
        } else {
            MagicVariant::MAGIC_MICROS
        };

        let mut out = Vec::with_capacity(24 + self.body.len());
        self.put_u32(&mut out, magic);
        self.put_u16(&mut out, 2);
        self.put_u16(&mut out, 4);
        self.put_u32(&mut out, 0); // thiszone
        self.put_u32(&mut out, 0); // sigfigs
        self.put_u32(&mut out, TEST_SNAPLEN);
        self.put_u32(&mut out, self.datalink);
        out.extend_from_slice(&self.body);
        out
    }

    fn put_u16(&self, out: &mut Vec<u8>, value: u16) {
        let bytes = match self.endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        out.extend_from_slice(&bytes);
    }

    fn put_u32(&self, out: &mut Vec<u8>, value: u32) {
        let bytes = match self.endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        out.extend_from_slice(&bytes);
    }
}

/// Write `bytes` to a fresh temporary file and return its handle; the
/// file is deleted when the handle drops.
pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
