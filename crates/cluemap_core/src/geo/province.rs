//! Administrative region normalization and classification.
//!
//! # Responsibility
//! - Map short forms of provinces/regions to full administrative names.
//! - Classify a destination as domestic or international.
//! - Resolve fixed map centers for canonical names.
//!
//! # Invariants
//! - `normalize` is total and idempotent; unknown names pass through.
//! - `is_international` agrees for a name and its normalized form.
//! - Not every domestic region has a registered center; `None` is expected.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Short form (and special-case) aliases to full administrative names.
/// 九龙 appears in the dataset as a sub-district and maps to its parent
/// special administrative region.
const PROVINCE_ALIASES: &[(&str, &str)] = &[
    ("北京", "北京市"),
    ("天津", "天津市"),
    ("上海", "上海市"),
    ("重庆", "重庆市"),
    ("河北", "河北省"),
    ("山西", "山西省"),
    ("辽宁", "辽宁省"),
    ("吉林", "吉林省"),
    ("黑龙江", "黑龙江省"),
    ("江苏", "江苏省"),
    ("浙江", "浙江省"),
    ("安徽", "安徽省"),
    ("福建", "福建省"),
    ("江西", "江西省"),
    ("山东", "山东省"),
    ("河南", "河南省"),
    ("湖北", "湖北省"),
    ("湖南", "湖南省"),
    ("广东", "广东省"),
    ("海南", "海南省"),
    ("四川", "四川省"),
    ("贵州", "贵州省"),
    ("云南", "云南省"),
    ("陕西", "陕西省"),
    ("甘肃", "甘肃省"),
    ("青海", "青海省"),
    ("台湾", "台湾省"),
    ("内蒙古", "内蒙古自治区"),
    ("广西", "广西壮族自治区"),
    ("西藏", "西藏自治区"),
    ("宁夏", "宁夏回族自治区"),
    ("新疆", "新疆维吾尔自治区"),
    ("香港", "香港特别行政区"),
    ("澳门", "澳门特别行政区"),
    ("九龙", "香港特别行政区"),
];

/// Full administrative names of domestic provinces and region-level units.
const DOMESTIC_FULL_NAMES: &[&str] = &[
    "北京市", "天津市", "河北省", "山西省", "内蒙古自治区",
    "辽宁省", "吉林省", "黑龙江省",
    "上海市", "江苏省", "浙江省", "安徽省", "福建省", "江西省", "山东省",
    "河南省", "湖北省", "湖南省", "广东省", "广西壮族自治区", "海南省",
    "重庆市", "四川省", "贵州省", "云南省", "西藏自治区",
    "陕西省", "甘肃省", "青海省", "宁夏回族自治区", "新疆维吾尔自治区",
    "香港特别行政区", "澳门特别行政区", "台湾省",
];

/// Geographic centers for map binding, keyed by canonical name. The special
/// administrative regions and 台湾 have no registered center.
const PROVINCE_CENTERS: &[(&str, (f64, f64))] = &[
    ("北京市", (116.4, 39.9)),
    ("天津市", (117.2, 39.1)),
    ("河北省", (114.5, 38.0)),
    ("山西省", (112.5, 37.9)),
    ("内蒙古自治区", (111.7, 40.8)),
    ("辽宁省", (123.4, 41.8)),
    ("吉林省", (125.3, 43.9)),
    ("黑龙江省", (126.6, 45.8)),
    ("上海市", (121.5, 31.2)),
    ("江苏省", (118.8, 32.1)),
    ("浙江省", (120.2, 30.3)),
    ("安徽省", (117.3, 31.9)),
    ("福建省", (119.3, 26.1)),
    ("江西省", (115.9, 28.7)),
    ("山东省", (117.0, 36.7)),
    ("河南省", (113.7, 34.8)),
    ("湖北省", (114.3, 30.6)),
    ("湖南省", (113.0, 28.2)),
    ("广东省", (113.3, 23.1)),
    ("广西壮族自治区", (108.3, 22.8)),
    ("海南省", (110.3, 20.0)),
    ("重庆市", (106.5, 29.6)),
    ("四川省", (104.1, 30.7)),
    ("贵州省", (106.7, 26.6)),
    ("云南省", (102.7, 25.0)),
    ("西藏自治区", (91.1, 29.7)),
    ("陕西省", (108.9, 34.3)),
    ("甘肃省", (103.8, 36.1)),
    ("青海省", (101.8, 36.6)),
    ("宁夏回族自治区", (106.3, 38.5)),
    ("新疆维吾尔自治区", (87.6, 43.8)),
];

static ALIAS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PROVINCE_ALIASES.iter().copied().collect());

static DOMESTIC_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    // Short forms count as domestic too, so raw dataset values classify
    // correctly without a prior normalize pass.
    DOMESTIC_FULL_NAMES
        .iter()
        .copied()
        .chain(PROVINCE_ALIASES.iter().map(|(short, _)| *short))
        .collect()
});

static CENTER_MAP: Lazy<HashMap<&'static str, (f64, f64)>> =
    Lazy::new(|| PROVINCE_CENTERS.iter().copied().collect());

/// Resolves a region alias to its canonical administrative name.
///
/// Unknown names (international destinations, historical place names) are
/// returned unchanged.
pub fn normalize(name: &str) -> &str {
    ALIAS_MAP.get(name).copied().unwrap_or(name)
}

/// Returns true when neither the raw name nor its canonical form is a
/// domestic region.
pub fn is_international(name: &str) -> bool {
    !DOMESTIC_SET.contains(name) && !DOMESTIC_SET.contains(normalize(name))
}

/// Fixed `(longitude, latitude)` center for a region, keyed by canonical
/// name. Returns `None` for regions without a registered center.
pub fn center_of(name: &str) -> Option<(f64, f64)> {
    CENTER_MAP.get(normalize(name)).copied()
}

#[cfg(test)]
mod tests {
    use super::{center_of, is_international, normalize};

    #[test]
    fn normalize_maps_short_forms() {
        assert_eq!(normalize("广西"), "广西壮族自治区");
        assert_eq!(normalize("九龙"), "香港特别行政区");
    }

    #[test]
    fn normalize_passes_unknown_names_through() {
        assert_eq!(normalize("波斯"), "波斯");
        assert_eq!(normalize("长安"), "长安");
    }

    #[test]
    fn center_lookup_goes_through_normalization() {
        assert_eq!(center_of("新疆"), Some((87.6, 43.8)));
        assert_eq!(center_of("香港"), None);
        assert_eq!(center_of("爪哇"), None);
    }

    #[test]
    fn short_forms_are_domestic() {
        assert!(!is_international("黑龙江"));
        assert!(!is_international("九龙"));
        assert!(is_international("日本"));
    }
}
