//! Geographic reference data and region classification.
//!
//! # Responsibility
//! - Keep the fixed alias/domestic/center tables in one place.
//! - Expose pure lookup functions to the aggregation layer.

pub mod province;
