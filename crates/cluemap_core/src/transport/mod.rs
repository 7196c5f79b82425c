//! Transport record aggregation layer.
//!
//! # Responsibility
//! - Load the static transport dataset.
//! - Provide pure filter/group/rollup functions consumed by map and chart
//!   collaborators.
//!
//! # Invariants
//! - Aggregates are rebuilt on demand, never mutated incrementally.

pub mod aggregate;
pub mod dataset;

pub use aggregate::{
    domestic_connections, dynasty_overview, filter_by_dynasty, filter_by_type,
    group_by_dynasty_province_type, international_destinations, line_weight,
};
pub use dataset::{load_records, parse_records, DataError, DataResult};
