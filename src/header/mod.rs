// src/header/mod.rs
mod global;
mod record;

pub use global::GlobalHeader;
pub use record::RecordHeader;
