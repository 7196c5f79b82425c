//! Clue extraction entry points.
//!
//! # Responsibility
//! - Normalize heterogeneous source payloads into uniform clue fields.
//! - Keep the projection best-effort: extraction never fails.

pub mod extract;

pub use extract::{extract_clue, CluePayload, ExtractedClue};
