// src/reader/mod.rs
mod inspect;
mod walker;

pub use inspect::{
    classify, data_link, duration, first_timestamp, is_pcap, last_timestamp, record_count, version,
};
pub use walker::{ReadSeek, RecordWalker, WalkResult, WalkStatus};
