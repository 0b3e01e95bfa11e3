// src/reader/walker.rs
use crate::error::{PcapError, Result};
use crate::header::{GlobalHeader, RecordHeader};
use crate::types::Timestamp;
use crate::utils::read_fully;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Terminal state of a record walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// The walk reached the end of the file exactly at a record boundary.
    Complete,
    /// A record header, or the payload leading up to one, was cut short.
    Truncated { needed: usize, have: usize },
}

/// Aggregates produced by walking every record of a capture.
///
/// Only fixed-size summary state is kept; no record is retained, so a
/// walk stays O(1) in memory however many records the file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkResult {
    /// Number of records seen; saturates at `u32::MAX`.
    pub record_count: u32,
    /// Timestamp of the first record, when at least one existed.
    pub first: Option<Timestamp>,
    /// Timestamp of the most recently decoded record header.
    pub last: Option<Timestamp>,
    /// Whether the walk ended cleanly or mid-record.
    pub status: WalkStatus,
}

impl WalkResult {
    pub fn is_complete(&self) -> bool {
        self.status == WalkStatus::Complete
    }

    /// Elapsed time from the first to the last record.
    ///
    /// `None` on an empty capture; zero when exactly one record exists.
    pub fn duration(&self) -> Option<Duration> {
        match (self.first, self.last) {
            (Some(first), Some(last)) => Some(last.duration_since(first)),
            _ => None,
        }
    }
}

/// Sequential reader over the records of a classic pcap file.
///
/// Opening validates the global header and rejects anything that is not a
/// classic capture. Each [`next_record`](RecordWalker::next_record) call
/// decodes one 16-byte record header and then skips the payload by its
/// declared captured length. Payload bytes are never read, so scanning a
/// multi-gigabyte capture buffers two fixed-size headers at most.
#[derive(Debug)]
pub struct RecordWalker<R: ReadSeek> {
    reader: R,
    header: GlobalHeader,
    file_len: u64,
    position: u64,
}

/// Constructor for standard file I/O
impl RecordWalker<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::with_capacity(65536, file))
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl RecordWalker<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_reader(Cursor::new(mmap))
    }
}

impl<R: ReadSeek> RecordWalker<R> {
    /// Validate the global header of `reader` and position the walk at
    /// the first record.
    ///
    /// Fails with [`PcapError::TruncatedHeader`] when fewer than 24 bytes
    /// exist and with [`PcapError::UnsupportedFormat`] for pcapng or an
    /// unrecognized magic number.
    pub fn from_reader(mut reader: R) -> Result<Self> {
        let file_len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut buf = [0u8; GlobalHeader::LEN];
        let n = read_fully(&mut reader, &mut buf)?;
        if n < GlobalHeader::LEN {
            return Err(PcapError::TruncatedHeader {
                needed: GlobalHeader::LEN,
                have: n,
            });
        }

        let header = GlobalHeader::decode(&buf)?;
        if !header.magic.is_supported() {
            return Err(PcapError::UnsupportedFormat {
                variant: header.magic,
                magic: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            });
        }

        Ok(RecordWalker {
            reader,
            header,
            file_len,
            position: GlobalHeader::LEN as u64,
        })
    }

    /// The validated global header of the capture being walked.
    pub fn global_header(&self) -> &GlobalHeader {
        &self.header
    }

    /// Decode the next record header and skip over its payload.
    ///
    /// Returns `Ok(None)` at a clean end of file. The payload skip is a
    /// pure positional seek with no upfront bounds check: a captured
    /// length that runs past the end of the file is only noticed on the
    /// following call, when zero bytes come back beyond the file's
    /// length, and surfaces as [`PcapError::TruncatedHeader`] instead of
    /// a silently short record count.
    pub fn next_record(&mut self) -> Result<Option<RecordHeader>> {
        let mut buf = [0u8; RecordHeader::LEN];
        let n = read_fully(&mut self.reader, &mut buf)?;

        if n == 0 {
            if self.position > self.file_len {
                // The previous skip passed the end of file: its record
                // declared more payload than the file holds.
                return Err(PcapError::TruncatedHeader {
                    needed: RecordHeader::LEN,
                    have: 0,
                });
            }
            return Ok(None);
        }
        if n < RecordHeader::LEN {
            return Err(PcapError::TruncatedHeader {
                needed: RecordHeader::LEN,
                have: n,
            });
        }

        let record = RecordHeader::decode(&buf, self.header.endianness)?;
        self.position = self.position.saturating_add(RecordHeader::LEN as u64);

        self.reader
            .seek(SeekFrom::Current(i64::from(record.captured_len)))?;
        self.position = self.position.saturating_add(u64::from(record.captured_len));

        Ok(Some(record))
    }

    /// Walk to the end of the capture, accumulating [`WalkResult`].
    ///
    /// Structural truncation ends the walk and is recorded in the result's
    /// status, keeping the aggregates gathered up to that point available;
    /// only I/O failures return `Err`.
    pub fn walk(mut self) -> Result<WalkResult> {
        let mut result = WalkResult {
            record_count: 0,
            first: None,
            last: None,
            status: WalkStatus::Complete,
        };

        loop {
            match self.next_record() {
                Ok(Some(record)) => {
                    let ts = record.timestamp(self.header.magic);
                    if result.first.is_none() {
                        result.first = Some(ts);
                    }
                    result.last = Some(ts);
                    result.record_count = result.record_count.saturating_add(1);
                }
                Ok(None) => break,
                Err(PcapError::TruncatedHeader { needed, have }) => {
                    result.status = WalkStatus::Truncated { needed, have };
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(result)
    }
}
