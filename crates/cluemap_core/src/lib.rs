//! Data core for a historical-geography dashboard.
//!
//! Aggregates multi-dynasty transport records for map/chart collaborators,
//! normalizes administrative region names, extracts "clues" from
//! visualization detail payloads, and keeps the user's curated collection
//! board with duplicate detection and local persistence.

pub mod clue;
pub mod db;
pub mod geo;
pub mod logging;
pub mod model;
pub mod store;
pub mod transport;

pub use clue::{extract_clue, CluePayload, ExtractedClue};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ClueKind, InspirationItem, ItemDraft, ItemKind, ItemUpdate};
pub use model::transport::{
    DynastyStats, GroupedData, InternationalDestination, TransportRecord, TransportType,
    TypeCounts, DYNASTIES,
};
pub use store::{
    CategorySummary, CollectionStore, ExportEnvelope, MemoryBackend, Notice, NoticeLevel,
    NoticeSink, SqliteBackend, StorageBackend, StoreError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
