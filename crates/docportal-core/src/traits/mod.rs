//! Cross-crate traits.

pub mod storage;

pub use storage::{ByteStream, StorageProvider};
