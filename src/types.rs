// src/types.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Classification of a capture file's magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagicVariant {
    /// Classic pcap, microsecond timestamp fractions.
    Classic,
    /// Classic pcap, nanosecond timestamp fractions.
    ClassicNanosecond,
    /// Next-generation container (pcapng); recognized and rejected,
    /// never parsed.
    NextGeneration,
    /// Not a recognized magic number.
    Invalid,
}

impl MagicVariant {
    /// Classic magic as read little-endian from a natively written file.
    pub const MAGIC_MICROS: u32 = 0xa1b2_c3d4;
    /// Classic magic from a byte-swapped (big-endian) file.
    pub const MAGIC_MICROS_SWAPPED: u32 = 0xd4c3_b2a1;
    /// Nanosecond-resolution magic, native byte order.
    pub const MAGIC_NANOS: u32 = 0xa1b2_3c4d;
    /// Nanosecond-resolution magic, byte-swapped.
    pub const MAGIC_NANOS_SWAPPED: u32 = 0x4d3c_b2a1;
    /// pcapng section header magic; palindromic, so it reads the same
    /// under either byte order.
    pub const MAGIC_PCAPNG: u32 = 0x0a0d_0d0a;

    /// Classify the first four bytes of a capture file.
    ///
    /// The bytes are interpreted as a little-endian `u32` and compared
    /// against the known constants; only exact matches count. The byte
    /// order in the result is meaningful for the classic variants only.
    pub fn classify(magic: [u8; 4]) -> (MagicVariant, Endianness) {
        match u32::from_le_bytes(magic) {
            Self::MAGIC_MICROS => (MagicVariant::Classic, Endianness::Little),
            Self::MAGIC_MICROS_SWAPPED => (MagicVariant::Classic, Endianness::Big),
            Self::MAGIC_NANOS => (MagicVariant::ClassicNanosecond, Endianness::Little),
            Self::MAGIC_NANOS_SWAPPED => (MagicVariant::ClassicNanosecond, Endianness::Big),
            Self::MAGIC_PCAPNG => (MagicVariant::NextGeneration, Endianness::Little),
            _ => (MagicVariant::Invalid, Endianness::Little),
        }
    }

    /// True for the classic variants this crate can walk.
    pub fn is_supported(&self) -> bool {
        matches!(self, MagicVariant::Classic | MagicVariant::ClassicNanosecond)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MagicVariant::Classic => "pcap",
            MagicVariant::ClassicNanosecond => "pcap-nanosecond",
            MagicVariant::NextGeneration => "pcapng",
            MagicVariant::Invalid => "unknown",
        }
    }
}

impl fmt::Display for MagicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of the multi-byte header fields of a capture.
///
/// Derived solely from which magic constant matched; it is never
/// configured independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Read a `u16` from the front of `buf` in this byte order.
    pub fn read_u16(&self, buf: &[u8]) -> u16 {
        match self {
            Endianness::Little => LittleEndian::read_u16(buf),
            Endianness::Big => BigEndian::read_u16(buf),
        }
    }

    /// Read a `u32` from the front of `buf` in this byte order.
    pub fn read_u32(&self, buf: &[u8]) -> u32 {
        match self {
            Endianness::Little => LittleEndian::read_u32(buf),
            Endianness::Big => BigEndian::read_u32(buf),
        }
    }
}

/// Instant a record was captured, normalized to nanosecond precision.
///
/// Classic captures store microsecond fractions; those are scaled by 1000
/// on construction so duration arithmetic never mixes units. `nanos` is
/// always below one second; a larger fraction (malformed captures only)
/// is carried into `secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// Seconds since the Unix epoch (UTC).
    pub secs: u32,
    /// Nanoseconds into the second, `< 1_000_000_000`.
    pub nanos: u32,
}

impl Timestamp {
    const NANOS_PER_SEC: u64 = 1_000_000_000;

    /// Timestamp from a microsecond-resolution record header.
    pub fn from_micros(secs: u32, micros: u32) -> Self {
        Self::normalized(secs, u64::from(micros) * 1_000)
    }

    /// Timestamp from a nanosecond-resolution record header.
    pub fn from_nanos(secs: u32, nanos: u32) -> Self {
        Self::normalized(secs, u64::from(nanos))
    }

    fn normalized(secs: u32, nanos: u64) -> Self {
        let carry = nanos / Self::NANOS_PER_SEC;
        Timestamp {
            secs: secs.saturating_add(carry as u32),
            nanos: (nanos % Self::NANOS_PER_SEC) as u32,
        }
    }

    /// Time elapsed from `earlier` to this timestamp, saturating to zero
    /// when `earlier` is actually the later of the two.
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        Duration::new(u64::from(self.secs), self.nanos)
            .saturating_sub(Duration::new(u64::from(earlier.secs), earlier.nanos))
    }

    pub fn to_system_time(&self) -> SystemTime {
        UNIX_EPOCH + Duration::new(u64::from(self.secs), self.nanos)
    }
}

/// Link-layer type code from the global header.
///
/// Codes follow the tcpdump registry: <https://www.tcpdump.org/linktypes.html>.
/// The registry is open-ended, so this is a newtype over the raw code with
/// names for the types commonly seen in captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataLink(pub u32);

impl DataLink {
    pub const NULL: DataLink = DataLink(0);
    pub const ETHERNET: DataLink = DataLink(1);
    pub const IEEE802_5: DataLink = DataLink(6);
    pub const IEEE802_11: DataLink = DataLink(105);
    pub const IEEE802_11_RADIOTAP: DataLink = DataLink(127);
    pub const BLUETOOTH_LE_LL: DataLink = DataLink(251);

    /// Registry name for this code, if it is one of the known types.
    pub fn name(&self) -> Option<&'static str> {
        match self.0 {
            0 => Some("LINKTYPE_NULL"),
            1 => Some("LINKTYPE_ETHERNET"),
            6 => Some("LINKTYPE_IEEE802_5"),
            105 => Some("LINKTYPE_IEEE802_11"),
            127 => Some("LINKTYPE_IEEE802_11_RADIOTAP"),
            251 => Some("LINKTYPE_BLUETOOTH_LE_LL"),
            _ => None,
        }
    }
}

impl From<u32> for DataLink {
    fn from(code: u32) -> Self {
        DataLink(code)
    }
}

impl fmt::Display for DataLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "LINKTYPE_{}", self.0),
        }
    }
}
