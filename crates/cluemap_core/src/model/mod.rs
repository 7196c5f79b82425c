//! Domain model for transport facts and collection items.
//!
//! # Responsibility
//! - Define canonical data structures used by the aggregation and store
//!   layers.
//! - Keep wire naming stable: dataset fields snake_case, board items
//!   camelCase.
//!
//! # Invariants
//! - Transport records are immutable facts; aggregates are derived views.
//! - Collection items have a stable `id` and a unique `(title, kind)` pair.

pub mod item;
pub mod transport;
