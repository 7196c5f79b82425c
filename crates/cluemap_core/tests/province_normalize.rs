use cluemap_core::geo::province::{center_of, is_international, normalize};

const SAMPLE_NAMES: &[&str] = &[
    "北京", "北京市", "上海", "内蒙古", "广西", "西藏", "香港", "九龙", "台湾",
    "黑龙江省", "新疆维吾尔自治区", "日本", "波斯", "长安", "爪哇",
];

#[test]
fn normalize_is_idempotent() {
    for name in SAMPLE_NAMES {
        let once = normalize(name);
        assert_eq!(normalize(once), once, "normalize not idempotent for {name}");
    }
}

#[test]
fn normalize_expands_short_forms_to_full_names() {
    assert_eq!(normalize("北京"), "北京市");
    assert_eq!(normalize("内蒙古"), "内蒙古自治区");
    assert_eq!(normalize("宁夏"), "宁夏回族自治区");
    assert_eq!(normalize("澳门"), "澳门特别行政区");
}

#[test]
fn kowloon_maps_to_hong_kong() {
    assert_eq!(normalize("九龙"), "香港特别行政区");
    assert!(!is_international("九龙"));
}

#[test]
fn full_names_pass_through_unchanged() {
    assert_eq!(normalize("四川省"), "四川省");
    assert_eq!(normalize("香港特别行政区"), "香港特别行政区");
}

#[test]
fn is_international_agrees_for_raw_and_normalized_forms() {
    for name in SAMPLE_NAMES {
        assert_eq!(
            is_international(name),
            is_international(normalize(name)),
            "classification disagrees for {name}"
        );
    }
}

#[test]
fn foreign_destinations_are_international() {
    assert!(is_international("日本"));
    assert!(is_international("波斯"));
    // Place names below province level classify as international too, since
    // the domestic list only carries province-level units; consumers dealing
    // in historical geography accept this.
    assert!(is_international("长安"));
    assert!(is_international("泉州"));
}

#[test]
fn center_lookup_normalizes_first() {
    assert_eq!(center_of("北京"), Some((116.4, 39.9)));
    assert_eq!(center_of("北京市"), Some((116.4, 39.9)));
    assert_eq!(center_of("新疆"), Some((87.6, 43.8)));
}

#[test]
fn regions_without_centers_return_none() {
    assert_eq!(center_of("香港"), None);
    assert_eq!(center_of("台湾"), None);
    assert_eq!(center_of("日本"), None);
}
