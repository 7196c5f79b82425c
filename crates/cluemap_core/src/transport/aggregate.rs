//! Pure aggregation over transport records.
//!
//! # Responsibility
//! - Filter, group and roll up `TransportRecord` sets for map/chart views.
//! - Keep every function pure and total over well-formed input.
//!
//! # Invariants
//! - Group output order is the insertion order of each key's first
//!   occurrence, never sorted.
//! - Records with empty evidence increment the group count without adding
//!   an evidence entry.
//! - Unknown transport type strings are not validated away; they group under
//!   whatever string they carry.

use crate::geo::province::{is_international, normalize};
use crate::model::transport::{
    DynastyStats, GroupedData, InternationalDestination, TransportRecord, TransportType,
    TypeCounts, DYNASTIES,
};
use std::collections::HashMap;

/// The system's own reference province; excluded from domestic connection
/// groupings to avoid self-loops in the flow visualization.
const HUB_PROVINCE: &str = "北京市";
const HUB_PROVINCE_SHORT: &str = "北京";

/// Keeps records of one dynasty; identity filter when `dynasty` is `None`.
pub fn filter_by_dynasty<'a>(
    records: &'a [TransportRecord],
    dynasty: Option<&str>,
) -> Vec<&'a TransportRecord> {
    match dynasty {
        None => records.iter().collect(),
        Some(dynasty) => records
            .iter()
            .filter(|record| record.standard_dynasty == dynasty)
            .collect(),
    }
}

/// Keeps records whose type is in `types`; identity filter when empty.
pub fn filter_by_type<'a>(
    records: &'a [TransportRecord],
    types: &[TransportType],
) -> Vec<&'a TransportRecord> {
    if types.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| types.contains(&record.transport_type))
        .collect()
}

/// Groups records by `(dynasty, province, type)` in a single pass.
pub fn group_by_dynasty_province_type(
    records: impl IntoIterator<Item = impl std::borrow::Borrow<TransportRecord>>,
) -> Vec<GroupedData> {
    let mut groups: Vec<GroupedData> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let record = record.borrow();
        let key = format!(
            "{}|{}|{}",
            record.standard_dynasty,
            record.target_province,
            record.transport_type.as_str()
        );

        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(GroupedData {
                dynasty: record.standard_dynasty.clone(),
                province: record.target_province.clone(),
                transport_type: record.transport_type.clone(),
                count: 0,
                evidences: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        if !record.evidence.is_empty() {
            group.evidences.push(record.evidence.clone());
        }
    }

    groups
}

/// Domestic connection groups, excluding the hub province itself.
pub fn domestic_connections(records: &[TransportRecord]) -> Vec<GroupedData> {
    let filtered = records.iter().filter(|record| {
        let province = record.target_province.as_str();
        !is_international(province)
            && normalize(province) != HUB_PROVINCE
            && province != HUB_PROVINCE
            && province != HUB_PROVINCE_SHORT
    });
    group_by_dynasty_province_type(filtered)
}

/// International destinations grouped by raw name, sorted by record count
/// descending; ties keep discovery order (stable sort).
pub fn international_destinations(records: &[TransportRecord]) -> Vec<InternationalDestination> {
    let mut destinations: Vec<InternationalDestination> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| is_international(&record.target_province))
    {
        let slot = *index
            .entry(record.target_province.clone())
            .or_insert_with(|| {
                destinations.push(InternationalDestination {
                    name: record.target_province.clone(),
                    types: Default::default(),
                    dynasties: Default::default(),
                    records: Vec::new(),
                });
                destinations.len() - 1
            });

        let destination = &mut destinations[slot];
        destination
            .types
            .insert(record.transport_type.as_str().to_string());
        destination
            .dynasties
            .insert(record.standard_dynasty.clone());
        destination.records.push(record.clone());
    }

    destinations.sort_by(|a, b| b.records.len().cmp(&a.records.len()));
    destinations
}

/// Presentational line weight for a connection with `count` records.
///
/// Exactly `min(1 + log2(count + 1) * 1.5, 8)`: 1 at zero, monotone,
/// saturating at 8. Views depend on the exact formula for visual parity.
pub fn line_weight(count: usize) -> f64 {
    (1.0 + ((count as f64) + 1.0).log2() * 1.5).min(8.0)
}

/// Per-dynasty rollup over the fixed dynasty list.
///
/// Repeated filtering is O(dynasties x records), which is fine at this data
/// scale. `by_type` always reports the three fixed types, zeros included.
pub fn dynasty_overview(records: &[TransportRecord]) -> Vec<DynastyStats> {
    DYNASTIES
        .iter()
        .map(|&dynasty| {
            let subset: Vec<&TransportRecord> = records
                .iter()
                .filter(|record| record.standard_dynasty == dynasty)
                .collect();
            let international = subset
                .iter()
                .filter(|record| is_international(&record.target_province))
                .count();
            let count_type = |kind: &TransportType| {
                subset
                    .iter()
                    .filter(|record| record.transport_type == *kind)
                    .count()
            };

            DynastyStats {
                dynasty: dynasty.to_string(),
                total: subset.len(),
                domestic: subset.len() - international,
                international,
                by_type: TypeCounts {
                    land: count_type(&TransportType::Land),
                    water: count_type(&TransportType::Water),
                    sea_route: count_type(&TransportType::SeaRoute),
                },
            }
        })
        .collect()
}
