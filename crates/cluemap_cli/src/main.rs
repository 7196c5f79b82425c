//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cluemap_core` linkage.
//! - Optionally print a dynasty overview for a dataset file, for quick
//!   local sanity checks on new data drops.

use cluemap_core::transport::{dynasty_overview, load_records};

fn main() {
    println!("cluemap_core version={}", cluemap_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        return;
    };

    let records = match load_records(&path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            std::process::exit(1);
        }
    };

    println!("records={}", records.len());
    for stats in dynasty_overview(&records) {
        println!(
            "dynasty={} total={} domestic={} international={} land={} water={} sea={}",
            stats.dynasty,
            stats.total,
            stats.domestic,
            stats.international,
            stats.by_type.land,
            stats.by_type.water,
            stats.by_type.sea_route
        );
    }
}
