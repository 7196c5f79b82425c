//! Collection board state and persistence.
//!
//! # Responsibility
//! - Own the curated item list and its uniqueness invariant.
//! - Persist through a pluggable key-value backend.
//! - Report operation outcomes through notice sinks.

pub mod backend;
pub mod collection;
pub mod notice;

pub use backend::{MemoryBackend, SqliteBackend, StorageBackend, StorageError, StorageResult};
pub use collection::{
    CategorySummary, CollectionStore, ExportEnvelope, StoreError, EXPORT_VERSION, STORAGE_KEY,
};
pub use notice::{LogNoticeSink, Notice, NoticeLevel, NoticeSink};
