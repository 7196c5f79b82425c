//! Transport record domain model.
//!
//! # Responsibility
//! - Define the immutable transport fact loaded from the source dataset.
//! - Define the derived aggregates rebuilt on demand from record sets.
//!
//! # Invariants
//! - `TransportRecord` is never mutated after load.
//! - `GroupedData.count >= GroupedData.evidences.len()` (empty evidence
//!   increments the count without appending).
//! - `InternationalDestination.records.len()` equals the number of
//!   contributing records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Dynasty axis used for grouping, in fixed chronological order.
pub const DYNASTIES: &[&str] = &[
    "先秦", "秦汉", "隋唐五代", "辽", "宋", "金", "元", "明", "清", "民国", "新中国",
];

/// How a historical connection was made.
///
/// Unknown strings from the dataset are preserved verbatim in `Other` so that
/// malformed records still group under whatever type they carry instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportType {
    /// Overland route (`陆路`).
    Land,
    /// Inland waterway (`水路`).
    Water,
    /// Maritime route (`航线`).
    SeaRoute,
    /// Unrecognized type string, carried as-is.
    Other(String),
}

impl TransportType {
    /// The three recognized types, in dataset order.
    pub const FIXED: [TransportType; 3] = [
        TransportType::Land,
        TransportType::Water,
        TransportType::SeaRoute,
    ];

    /// Dataset string for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Land => "陆路",
            Self::Water => "水路",
            Self::SeaRoute => "航线",
            Self::Other(value) => value,
        }
    }

    /// Presentation colour for map lines; `None` for unrecognized types.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::Land => Some("#8D6E63"),
            Self::Water => Some("#78909C"),
            Self::SeaRoute => Some("#9E9E9E"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for TransportType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "陆路" => Self::Land,
            "水路" => Self::Water,
            "航线" => Self::SeaRoute,
            _ => Self::Other(value),
        }
    }
}

impl From<TransportType> for String {
    fn from(value: TransportType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transport fact from the source dataset. Read-only for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRecord {
    /// Dynasty string as it appeared in the source text, when known.
    #[serde(default)]
    pub input_dynasty: Option<String>,
    /// Normalized dynasty used as the grouping axis.
    pub standard_dynasty: String,
    /// Destination region, raw (normalization is applied by consumers).
    pub target_province: String,
    pub transport_type: TransportType,
    /// Supporting source excerpt; may be empty.
    #[serde(default)]
    pub evidence: String,
}

/// Aggregate for one `(dynasty, province, type)` key.
///
/// Rebuilt on demand from a record set, never mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedData {
    pub dynasty: String,
    pub province: String,
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    pub count: usize,
    pub evidences: Vec<String>,
}

/// Aggregate for one international destination, keyed by raw name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternationalDestination {
    pub name: String,
    pub types: BTreeSet<String>,
    pub dynasties: BTreeSet<String>,
    pub records: Vec<TransportRecord>,
}

/// Per-type record counts; always reports all three fixed types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub land: usize,
    pub water: usize,
    pub sea_route: usize,
}

/// Per-dynasty rollup produced by the overview aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynastyStats {
    pub dynasty: String,
    pub total: usize,
    pub domestic: usize,
    pub international: usize,
    pub by_type: TypeCounts,
}

#[cfg(test)]
mod tests {
    use super::TransportType;

    #[test]
    fn fixed_type_strings_round_trip() {
        for kind in TransportType::FIXED {
            let text = String::from(kind.clone());
            assert_eq!(TransportType::from(text), kind);
        }
    }

    #[test]
    fn unknown_type_string_is_preserved() {
        let kind = TransportType::from("驿传".to_string());
        assert_eq!(kind, TransportType::Other("驿传".to_string()));
        assert_eq!(kind.as_str(), "驿传");
        assert!(kind.color().is_none());
    }
}
